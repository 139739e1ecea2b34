pub mod home_controller;
pub mod movie_controller;
