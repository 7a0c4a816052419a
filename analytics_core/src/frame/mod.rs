pub mod price_bar;
pub mod price_series;
pub mod raw_frame;
