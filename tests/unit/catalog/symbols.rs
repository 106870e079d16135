//! Tests for catalog construction, category lookup and symbol tension

#[cfg(test)]
mod tests {
    use snowdrift::SnowError;
    use snowdrift::catalog::{Catalog, Category};

    fn standard() -> Catalog {
        Catalog::standard().unwrap()
    }

    // Tests the fixed catalog has four small, four large and one space symbol
    // Verified by repeating a large symbol in the configuration
    #[test]
    fn test_standard_catalog_membership() {
        let catalog = standard();

        assert_eq!(catalog.members(Category::Small).len(), 4);
        assert_eq!(catalog.members(Category::Large).len(), 4);
        assert_eq!(catalog.members(Category::Space), &[' ']);
        assert_eq!(catalog.symbol_count(), 9);
        assert_eq!(
            catalog.categories().collect::<Vec<_>>(),
            vec![Category::Small, Category::Large, Category::Space]
        );
        assert_eq!(catalog.category_of('*'), Some(Category::Large));
        assert_eq!(catalog.category_of('.'), Some(Category::Small));
        assert_eq!(catalog.category_of('x'), None);
    }

    // Tests a symbol claimed by two categories fails construction
    // Verified by skipping the duplicate check
    #[test]
    fn test_duplicate_symbol_across_categories() {
        let result = Catalog::new(
            &[(Category::Small, ".,"), (Category::Large, "*,")],
            &[(Category::Small, 0.1), (Category::Large, 0.7)],
        );

        match result {
            Err(SnowError::DuplicateSymbol {
                symbol,
                first,
                second,
            }) => {
                assert_eq!(symbol, ',');
                assert_eq!(first, Category::Small);
                assert_eq!(second, Category::Large);
            }
            other => unreachable!("Expected DuplicateSymbol, got {other:?}"),
        }
    }

    // Tests repeating a symbol inside one category is collapsed, not rejected
    // Verified by pushing every character unconditionally
    #[test]
    fn test_repeat_within_category_collapses() {
        let catalog = Catalog::new(&[(Category::Large, "**+•")], &[(Category::Large, 0.7)]).unwrap();

        assert_eq!(catalog.members(Category::Large), &['*', '+', '•']);
    }

    // Tests a category with symbols but no tension weight is rejected
    // Verified by defaulting missing weights to zero
    #[test]
    fn test_missing_tension_weight() {
        let result = Catalog::new(
            &[(Category::Small, "."), (Category::Space, " ")],
            &[(Category::Small, 0.1)],
        );

        assert!(matches!(
            result,
            Err(SnowError::InvalidParameter {
                parameter: "tension",
                ..
            })
        ));
    }

    // Tests tension values for identical, same-category and unrelated symbols
    // Verified by letting identical spaces return 1.0
    #[test]
    fn test_tension_values() {
        let catalog = standard();

        assert!((catalog.tension('*', '*') - 1.0).abs() < f64::EPSILON);
        assert!((catalog.tension('.', '.') - 1.0).abs() < f64::EPSILON);
        assert!((catalog.tension(' ', ' ') - -0.1).abs() < f64::EPSILON);
        assert!((catalog.tension('*', '+') - 0.7).abs() < f64::EPSILON);
        assert!((catalog.tension('.', '`') - 0.1).abs() < f64::EPSILON);
        assert!(catalog.tension('*', '.').abs() < f64::EPSILON);
        assert!(catalog.tension(' ', '*').abs() < f64::EPSILON);
        assert!(catalog.tension('x', '*').abs() < f64::EPSILON);
    }

    // Tests tension is symmetric over every pair of catalog symbols
    // Verified by returning the first symbol's weight for mixed categories
    #[test]
    fn test_tension_symmetry() {
        let catalog = standard();
        let mut symbols: Vec<char> = Category::ALL
            .iter()
            .flat_map(|&c| catalog.members(c).to_vec())
            .collect();
        symbols.push('?');

        for &a in &symbols {
            for &b in &symbols {
                assert!(
                    (catalog.tension(a, b) - catalog.tension(b, a)).abs() < f64::EPSILON,
                    "tension({a:?}, {b:?}) is not symmetric"
                );
            }
        }
    }

    // Tests category names used in messages
    // Verified by swapping two display names
    #[test]
    fn test_category_names() {
        assert_eq!(Category::Small.to_string(), "small");
        assert_eq!(Category::Large.to_string(), "large");
        assert_eq!(Category::Space.to_string(), "space");
    }
}
