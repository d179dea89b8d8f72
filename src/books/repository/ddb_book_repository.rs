use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{from_ddb, parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, to_ddb_page};

// lowercased copy of the title, written next to it so scans can filter case-insensitively
const TITLE_LOWER: &str = "title_lower";
const SEARCH_PAGE_SIZE: i32 = 500;

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let mut item = parse_item(serde_json::to_value(entity)?)?;
        if let Some(title) = &entity.title {
            item.insert(TITLE_LOWER.to_string(), AttributeValue::S(title.to_lowercase()));
        }
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(item))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression("book_id = :book_id")
            .expression_attribute_values(":book_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map_err(LibraryError::from)?;
        match res.items() {
            Some([item]) => Ok(map_to_book(item)),
            Some(items) if items.len() > 1 => {
                Err(LibraryError::database(format!("too many books for {}", id).as_str(), None, false))
            }
            _ => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn scan(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .scan()
            .table_name(table_name)
            .consistent_read(false)
            .set_exclusive_start_key(to_ddb_page(page))
            .limit(cmp::min(page_size, 500) as i32)
            .send()
            .await.map_err(LibraryError::from)?;
        let records = res.items().unwrap_or_default().iter().map(map_to_book).collect();
        Ok(from_ddb(page, page_size, res.last_evaluated_key(), records))
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    // Note a scan limit bounds the items read, not the items matched, so pages may come back
    // short or empty while more pages remain.
    async fn search_by_title_substring(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let needle = query.to_lowercase();
        let mut books = vec![];
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(false)
                .filter_expression("contains(#title_lower, :q)")
                .expression_attribute_names("#title_lower", TITLE_LOWER)
                .expression_attribute_values(":q", AttributeValue::S(needle.clone()))
                .set_exclusive_start_key(start_key.take())
                .limit(SEARCH_PAGE_SIZE)
                .send()
                .await.map_err(LibraryError::from)?;
            books.extend(res.items().unwrap_or_default().iter().map(map_to_book));
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(books)
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or_default(),
        version: parse_number_attribute("version", map),
        title: parse_string_attribute("title", map),
        author: parse_string_attribute("author", map),
        isbn: parse_string_attribute("isbn", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}
