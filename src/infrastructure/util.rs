use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::generate_slug;

/// Table-driven generator behind the `SlugGenerator` port: lowercases,
/// folds the Turkish letter set to ASCII and hyphenates everything else.
#[derive(Default, Clone)]
pub struct TurkishSlugGenerator;

impl SlugGenerator for TurkishSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}
