// Static editor aids: skill suggestions and cover-letter templates.

pub mod cover_letter;
pub mod handlers;
pub mod skills;
