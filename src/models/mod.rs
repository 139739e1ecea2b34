pub mod movie_model;
