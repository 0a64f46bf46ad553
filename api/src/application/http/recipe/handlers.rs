pub mod generate_image;
pub mod generate_recipes;
