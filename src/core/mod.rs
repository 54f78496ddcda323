pub mod animation;
pub mod chart;
pub mod dispatch;
pub mod experiment;
pub mod figure;
pub mod models;
pub mod params;
pub mod series;
pub mod window;
