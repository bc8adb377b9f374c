mod post_news;

pub use post_news::{post_news, NewsRequest};

pub use post_news::__path_post_news;
