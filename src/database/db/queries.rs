use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::Row;
use sqlx::{Pool, Postgres};
use std::str::FromStr;

use crate::database::models::{Order, Product};

/*
This file contains the PostgreSQL query and CRUD logic for the
products and orders tables, and is responsible for interacting
with the database.
 */

/*==========Filter / sort types=========== */

/// Sortable columns. Request input is parsed into this enum and only
/// the fixed column names below ever reach the SQL text, so a sort key
/// cannot carry SQL of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Name,
    Title,
    Quantity,
}

impl SortKey {
    fn column(self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::Title => "title",
            SortKey::Quantity => "quantity",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            "title" => Ok(SortKey::Title),
            "quantity" => Ok(SortKey::Quantity),
            _ => Err(UnknownSortKey),
        }
    }
}

#[derive(Debug)]
pub struct UnknownSortKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Absent fields mean "no constraint"; a price bound of 0 is a genuine
/// bound, not a sentinel.
#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
}

// NULL-guarded predicates: an unbound parameter skips its clause, so
// one statement serves every filter combination.
fn filtered_products_sql(sort: Option<SortKey>, order: SortOrder) -> String {
    let mut sql = String::from(
        "SELECT id, title, image_url, name, price, description, specifications, quantity, is_favorite, in_cart \
         FROM products \
         WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' OR title ILIKE '%' || $1 || '%') \
         AND ($2::DOUBLE PRECISION IS NULL OR price >= $2) \
         AND ($3::DOUBLE PRECISION IS NULL OR price <= $3)",
    );

    if let Some(key) = sort {
        sql.push_str(" ORDER BY ");
        sql.push_str(key.column());
        sql.push(' ');
        sql.push_str(order.keyword());
    }

    sql
}

/*==========Product Queries=========== */

pub async fn get_filtered_products(
    pool: &Pool<Postgres>,
    filter: &ProductFilter,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = filtered_products_sql(filter.sort, filter.order);

    sqlx::query_as::<_, Product>(&sql)
        .bind(filter.search.as_deref())
        .bind(filter.min_price)
        .bind(filter.max_price)
        .fetch_all(pool)
        .await
}

pub async fn get_product_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT id, title, image_url, name, price, description, specifications, quantity, is_favorite, in_cart
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

// Create product, returning the storage-assigned id
pub async fn create_product(pool: &Pool<Postgres>, p: &Product) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO products (title, image_url, name, price, description, specifications, quantity, is_favorite, in_cart)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(&p.title)
    .bind(&p.image_url)
    .bind(&p.name)
    .bind(p.price)
    .bind(&p.description)
    .bind(&p.specifications)
    .bind(p.quantity)
    .bind(p.is_favorite)
    .bind(p.in_cart)
    .fetch_one(pool)
    .await?;

    row.try_get("id")
}

pub async fn update_product(pool: &Pool<Postgres>, p: &Product) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET title = $1, image_url = $2, name = $3, price = $4,
            description = $5, specifications = $6, quantity = $7
        WHERE id = $8
        "#,
    )
    .bind(&p.title)
    .bind(&p.image_url)
    .bind(&p.name)
    .bind(p.price)
    .bind(&p.description)
    .bind(&p.specifications)
    .bind(p.quantity)
    .bind(p.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

pub async fn delete_product(pool: &Pool<Postgres>, id: i64) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

pub async fn update_product_quantity(
    pool: &Pool<Postgres>,
    id: i64,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("UPDATE products SET quantity = $1 WHERE id = $2")
        .bind(quantity)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Single-statement flip, atomic at the SQL level
pub async fn toggle_favorite(pool: &Pool<Postgres>, id: i64) -> Result<(), sqlx::Error> {
    let result = sqlx::query("UPDATE products SET is_favorite = NOT is_favorite WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

pub async fn toggle_cart(pool: &Pool<Postgres>, id: i64) -> Result<(), sqlx::Error> {
    let result = sqlx::query("UPDATE products SET in_cart = NOT in_cart WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/*==========Order Queries=========== */

/* The core logic of creating an order:
It is an atomic operation: it inserts the order record and clears the
cart state of every product in the snapshot list. If any step fails,
the database rolls back so no order is left with an uncleared cart. */

pub async fn create_order(
    pool: &Pool<Postgres>,
    user_id: &str,
    total_price: f64,
    order_date: DateTime<Utc>,
    products: &[Product],
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        r#"
        INSERT INTO orders (user_id, total_price, order_date, products)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(total_price)
    .bind(order_date)
    .bind(Json(products))
    .fetch_one(&mut *tx)
    .await?;

    let order_id: i64 = row.try_get("id")?;

    for product in products {
        sqlx::query("UPDATE products SET in_cart = FALSE, quantity = 0 WHERE id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(order_id)
}

pub async fn get_orders_by_user(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Vec<Order>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, total_price, order_date, products
        FROM orders
        WHERE user_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let products: Json<Vec<Product>> = row.try_get("products")?;

            Ok(Order {
                id: row.try_get("id")?,
                user_id: row.try_get("user_id")?,
                total_price: row.try_get("total_price")?,
                order_date: row.try_get("order_date")?,
                products: products.0,
            })
        })
        .collect::<Result<Vec<Order>, sqlx::Error>>()
}
