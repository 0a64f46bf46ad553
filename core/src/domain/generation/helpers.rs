use crate::domain::recipe::entities::{ImageRef, Recipe};

/// Returns a new batch with `image` set on the recipe titled `title`.
///
/// The first recipe with a matching title wins. Returns `None` when no recipe
/// carries that title; the caller skips the update in that case.
pub fn apply_image(recipes: &[Recipe], title: &str, image: &ImageRef) -> Option<Vec<Recipe>> {
    let index = recipes.iter().position(|r| r.title == title)?;
    let mut updated = recipes.to_vec();
    updated[index] = recipes[index].with_image(image);
    Some(updated)
}
