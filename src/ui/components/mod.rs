pub mod menu;
pub mod results;
pub mod test_screen;
pub mod typing_area;
