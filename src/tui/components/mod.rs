pub mod card;
pub mod category_menu;
pub mod deck_view;
pub mod shimmer;
pub mod title_bar;

pub use card::ArticleCard;
pub use category_menu::{CategoryMenu, CategoryMenuState, MenuEvent};
pub use deck_view::DeckView;
pub use shimmer::ShimmerCard;
pub use title_bar::TitleBar;
