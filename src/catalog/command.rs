pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod lookup_isbn_cmd;
pub mod new_book_cmd;
