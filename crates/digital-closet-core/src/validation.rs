//! Startup checks on the category directories.
//!
//! Every category is checked even after an earlier one fails, so a single
//! [`ValidationReport`] can list all problems at once.

use log::{info, warn};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery::list_identifiers;
use crate::duplicates::find_duplicates;
use crate::error::{Error, Result};
use crate::types::Category;

/// One reason a category directory cannot back an image set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationProblem {
    /// No directory configured for the category
    MissingCategory(Category),

    /// Configured directory does not exist
    MissingDirectory { category: Category, path: PathBuf },

    /// Directory exists but holds no images
    EmptyDirectory { category: Category, path: PathBuf },

    /// The listing repeats identifiers; every repeat occurrence is kept
    DuplicateIdentifiers {
        category: Category,
        duplicates: Vec<String>,
    },

    /// More than one listing was supplied for the category
    RepeatedCategory(Category),
}

impl ValidationProblem {
    /// Category the problem was found in
    pub fn category(&self) -> Category {
        match self {
            Self::MissingCategory(category) | Self::RepeatedCategory(category) => *category,
            Self::MissingDirectory { category, .. }
            | Self::EmptyDirectory { category, .. }
            | Self::DuplicateIdentifiers { category, .. } => *category,
        }
    }
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory(category) => write!(
                f,
                "No directory found for content type '{}' within given directories.",
                category
            ),
            Self::MissingDirectory { category, path } => write!(
                f,
                "Directory {} for content type '{}' does not exist.",
                path.display(),
                category
            ),
            Self::EmptyDirectory { category, path } => write!(
                f,
                "Directory {} for content type '{}' contains no images.",
                path.display(),
                category
            ),
            Self::DuplicateIdentifiers {
                category,
                duplicates,
            } => write!(
                f,
                "Duplicate file names detected in directory for content type '{}'. They are: {}.",
                category,
                duplicates.join(", ")
            ),
            Self::RepeatedCategory(category) => write!(
                f,
                "Content type '{}' was given more than one directory listing.",
                category
            ),
        }
    }
}

/// All problems found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub problems: Vec<ValidationProblem>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}

/// Identifiers listed for one category, in filesystem order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub directory: PathBuf,
    pub identifiers: Vec<String>,
}

/// Validated listings for every category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosetListing {
    pub top: CategoryListing,
    pub bottom: CategoryListing,
}

/// List a category's directory, without judging the contents yet
pub fn list_category(
    category: Category,
    directory: Option<&Path>,
    images_only: bool,
) -> Result<std::result::Result<CategoryListing, ValidationProblem>> {
    let Some(directory) = directory else {
        return Ok(Err(ValidationProblem::MissingCategory(category)));
    };

    match list_identifiers(directory, images_only) {
        Ok(identifiers) => Ok(Ok(CategoryListing {
            category,
            directory: directory.to_path_buf(),
            identifiers,
        })),
        Err(Error::FileNotFound(path)) => {
            Ok(Err(ValidationProblem::MissingDirectory { category, path }))
        }
        Err(e) => Err(e),
    }
}

/// Check a listing is non-empty and free of repeated identifiers
pub fn check_listing(listing: &CategoryListing) -> Option<ValidationProblem> {
    if listing.identifiers.is_empty() {
        return Some(ValidationProblem::EmptyDirectory {
            category: listing.category,
            path: listing.directory.clone(),
        });
    }

    let duplicates = find_duplicates(listing.identifiers.iter().cloned());
    if !duplicates.is_empty() {
        return Some(ValidationProblem::DuplicateIdentifiers {
            category: listing.category,
            duplicates,
        });
    }

    None
}

/// Check every listing and combine the outcome.
///
/// All listings are checked before failing, so the returned
/// [`Error::Validation`] names every problem found. Each category is
/// expected once; a second listing for it is reported, never merged.
pub fn validate_listings<I>(listings: I) -> Result<ClosetListing>
where
    I: IntoIterator<Item = std::result::Result<CategoryListing, ValidationProblem>>,
{
    let mut problems = Vec::new();
    let mut top = None;
    let mut bottom = None;
    let mut seen = HashSet::new();

    for listing in listings {
        let category = match &listing {
            Ok(listing) => listing.category,
            Err(problem) => problem.category(),
        };
        if !seen.insert(category) {
            let problem = ValidationProblem::RepeatedCategory(category);
            warn!("Validation failed: {}", problem);
            problems.push(problem);
            continue;
        }

        let listing = match listing {
            Ok(listing) => listing,
            Err(problem) => {
                warn!("Validation failed: {}", problem);
                problems.push(problem);
                continue;
            }
        };

        if let Some(problem) = check_listing(&listing) {
            warn!("Validation failed: {}", problem);
            problems.push(problem);
            continue;
        }

        info!(
            "Found {} {} images in {}",
            listing.identifiers.len(),
            listing.category,
            listing.directory.display()
        );
        match listing.category {
            Category::Top => top = Some(listing),
            Category::Bottom => bottom = Some(listing),
        }
    }

    if !problems.is_empty() {
        return Err(Error::Validation(ValidationReport { problems }));
    }

    match (top, bottom) {
        (Some(top), Some(bottom)) => Ok(ClosetListing { top, bottom }),
        (top, _) => {
            let missing = if top.is_none() {
                Category::Top
            } else {
                Category::Bottom
            };
            Err(Error::Validation(ValidationReport {
                problems: vec![ValidationProblem::MissingCategory(missing)],
            }))
        }
    }
}

/// Validate every configured category directory.
///
/// I/O failures other than a missing directory abort immediately.
pub fn validate_directories(config: &Config) -> Result<ClosetListing> {
    let listings = Category::ALL
        .into_iter()
        .map(|category| list_category(category, config.directory(category), config.images_only))
        .collect::<Result<Vec<_>>>()?;

    validate_listings(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn create_files(dir: &Path, names: &[&str]) {
        std::fs::create_dir_all(dir).unwrap();
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    fn config_for(top: Option<PathBuf>, bottom: Option<PathBuf>) -> Config {
        Config {
            top_directory: top,
            bottom_directory: bottom,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_directories() {
        let dir = tempdir().unwrap();
        let tops = dir.path().join("tops");
        let bottoms = dir.path().join("bottoms");
        create_files(&tops, &["shirt.jpg", "blouse.png"]);
        create_files(&bottoms, &["jeans.jpg"]);

        let listing = validate_directories(&config_for(Some(tops.clone()), Some(bottoms))).unwrap();

        assert_eq!(listing.top.directory, tops);
        assert_eq!(listing.top.identifiers.len(), 2);
        assert_eq!(listing.bottom.identifiers, vec!["jeans.jpg"]);
    }

    #[test]
    fn test_missing_category() {
        let dir = tempdir().unwrap();
        let tops = dir.path().join("tops");
        create_files(&tops, &["shirt.jpg"]);

        let result = validate_directories(&config_for(Some(tops), None));

        match result {
            Err(Error::Validation(report)) => {
                assert_eq!(
                    report.problems,
                    vec![ValidationProblem::MissingCategory(Category::Bottom)]
                );
                assert_eq!(
                    report.to_string(),
                    "No directory found for content type 'bottom' within given directories."
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_and_empty_directories() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty");
        std::fs::create_dir(&empty).unwrap();
        let absent = dir.path().join("absent");

        let result = validate_directories(&config_for(Some(absent.clone()), Some(empty.clone())));

        let Err(Error::Validation(report)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            report.problems,
            vec![
                ValidationProblem::MissingDirectory {
                    category: Category::Top,
                    path: absent,
                },
                ValidationProblem::EmptyDirectory {
                    category: Category::Bottom,
                    path: empty,
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_problem_message() {
        let problem = ValidationProblem::DuplicateIdentifiers {
            category: Category::Top,
            duplicates: vec!["a.jpg".to_string(), "a.jpg".to_string(), "b.jpg".to_string()],
        };
        assert_eq!(
            problem.to_string(),
            "Duplicate file names detected in directory for content type 'top'. They are: a.jpg, a.jpg, b.jpg."
        );
    }

    #[test]
    fn test_report_combines_every_category() {
        let report = ValidationReport {
            problems: vec![
                ValidationProblem::DuplicateIdentifiers {
                    category: Category::Top,
                    duplicates: vec!["shirt.jpg".to_string()],
                },
                ValidationProblem::MissingCategory(Category::Bottom),
            ],
        };
        let message = Error::Validation(report).to_string();

        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("'top'"));
        assert!(lines[0].contains("shirt.jpg"));
        assert!(lines[1].contains("'bottom'"));
    }

    fn listing(category: Category, names: &[&str]) -> CategoryListing {
        CategoryListing {
            category,
            directory: PathBuf::from(format!("{}_images", category)),
            identifiers: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_duplicates_in_one_category_checks_the_other() {
        let result = validate_listings(vec![
            Ok(listing(Category::Top, &["a.jpg", "b.jpg", "a.jpg", "a.jpg", "c.jpg", "b.jpg"])),
            Ok(listing(Category::Bottom, &[])),
        ]);

        let Err(Error::Validation(report)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            report.problems,
            vec![
                ValidationProblem::DuplicateIdentifiers {
                    category: Category::Top,
                    duplicates: vec!["a.jpg".to_string(), "a.jpg".to_string(), "b.jpg".to_string()],
                },
                ValidationProblem::EmptyDirectory {
                    category: Category::Bottom,
                    path: PathBuf::from("bottom_images"),
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_in_both_categories() {
        let result = validate_listings(vec![
            Ok(listing(Category::Top, &["shirt.jpg", "shirt.jpg"])),
            Ok(listing(Category::Bottom, &["jeans.jpg", "skirt.jpg", "jeans.jpg"])),
        ]);

        let message = result.unwrap_err().to_string();
        assert_eq!(
            message,
            "Duplicate file names detected in directory for content type 'top'. They are: shirt.jpg.\n\
             Duplicate file names detected in directory for content type 'bottom'. They are: jeans.jpg."
        );
    }

    #[test]
    fn test_clean_listings_pass() {
        let closet = validate_listings(vec![
            Ok(listing(Category::Top, &["shirt.jpg"])),
            Ok(listing(Category::Bottom, &["jeans.jpg", "skirt.jpg"])),
        ])
        .unwrap();

        assert_eq!(closet.top.identifiers, vec!["shirt.jpg"]);
        assert_eq!(closet.bottom.identifiers.len(), 2);
    }

    #[test]
    fn test_repeated_category_is_reported() {
        let result = validate_listings(vec![
            Ok(listing(Category::Top, &["shirt.jpg"])),
            Ok(listing(Category::Top, &["blouse.jpg"])),
            Ok(listing(Category::Bottom, &["jeans.jpg"])),
        ]);

        let Err(Error::Validation(report)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            report.problems,
            vec![ValidationProblem::RepeatedCategory(Category::Top)]
        );
        assert!(report.to_string().contains("'top'"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_does_not_stop_validation() {
        let dir = tempdir().unwrap();
        let tops = dir.path().join("tops");
        create_files(&tops, &["shirt.jpg"]);
        std::os::unix::fs::symlink(tops.join("missing.jpg"), tops.join("old.jpg")).unwrap();

        let result = validate_directories(&config_for(Some(tops.clone()), None));

        let Err(Error::Validation(report)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            report.problems,
            vec![ValidationProblem::MissingCategory(Category::Bottom)]
        );

        let bottoms = dir.path().join("bottoms");
        create_files(&bottoms, &["jeans.jpg"]);
        let listing = validate_directories(&config_for(Some(tops), Some(bottoms))).unwrap();
        assert_eq!(listing.top.identifiers, vec!["shirt.jpg"]);
    }
}
