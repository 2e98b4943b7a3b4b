mod reply_connection_item;
pub use reply_connection_item::ReplyConnectionItem;

mod rich_text;
pub use rich_text::rich_text;
