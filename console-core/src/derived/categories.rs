//! Category derivations

use shared::models::Category;

/// One top-level category with its attached children
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub parent: Category,
    pub children: Vec<Category>,
}

/// Aggregate counts over the category collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryStats {
    pub total: usize,
    pub parents: usize,
    pub children: usize,
    pub without_parent: usize,
    pub average_children_per_parent: f64,
}

/// Two-level hierarchy: children attached to their parent by id.
///
/// A child whose `parent_category_id` matches no parent in `parents`
/// is excluded everywhere.
pub fn hierarchy(parents: &[Category], all: &[Category]) -> Vec<CategoryNode> {
    parents
        .iter()
        .filter(|p| p.category_id.is_some())
        .map(|parent| CategoryNode {
            parent: parent.clone(),
            children: all
                .iter()
                .filter(|c| c.parent_category_id == parent.category_id)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Counts and ratios over the whole collection.
///
/// `average_children_per_parent` is 0 when there are no parents.
pub fn stats(items: &[Category]) -> CategoryStats {
    let parents = items.iter().filter(|c| c.is_parent()).count();
    let children = items.len() - parents;
    CategoryStats {
        total: items.len(),
        parents,
        children,
        without_parent: parents,
        average_children_per_parent: if parents == 0 {
            0.0
        } else {
            children as f64 / parents as f64
        },
    }
}

/// Case-insensitive keyword filter over name and description
pub fn filter_by_keyword(items: &[Category], keyword: &str) -> Vec<Category> {
    let keyword = keyword.to_lowercase();
    items
        .iter()
        .filter(|c| {
            c.category_name.to_lowercase().contains(&keyword)
                || c.category_description.to_lowercase().contains(&keyword)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, parent: Option<i64>) -> Category {
        Category {
            category_id: Some(id),
            category_name: name.to_string(),
            category_description: format!("{} desc", name),
            parent_category_id: parent,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_hierarchy_excludes_dangling_children() {
        let all = vec![
            category(1, "Drinks", None),
            category(2, "Sodas", Some(1)),
            category(3, "Orphan", Some(99)),
        ];
        let parents = vec![category(1, "Drinks", None)];

        let nodes = hierarchy(&parents, &all);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children.len(), 1);
        assert_eq!(nodes[0].children[0].category_id, Some(2));
        assert!(
            nodes
                .iter()
                .all(|n| n.children.iter().all(|c| c.category_id != Some(3)))
        );
    }

    #[test]
    fn test_stats_zero_division_guard() {
        let empty = stats(&[]);
        assert_eq!(empty.average_children_per_parent, 0.0);

        let only_children = stats(&[category(2, "Sodas", Some(1))]);
        assert_eq!(only_children.average_children_per_parent, 0.0);

        let s = stats(&[
            category(1, "Drinks", None),
            category(2, "Sodas", Some(1)),
            category(3, "Juices", Some(1)),
        ]);
        assert_eq!(s.total, 3);
        assert_eq!(s.parents, 1);
        assert_eq!(s.average_children_per_parent, 2.0);
    }

    #[test]
    fn test_keyword_filter_is_case_insensitive() {
        let items = vec![category(1, "Drinks", None), category(2, "Food", None)];
        assert_eq!(filter_by_keyword(&items, "DRINK").len(), 1);
        assert_eq!(filter_by_keyword(&items, "desc").len(), 2);
        assert!(filter_by_keyword(&items, "nothing").is_empty());
    }
}
