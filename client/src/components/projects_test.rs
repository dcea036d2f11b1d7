use std::collections::HashSet;

use super::*;

#[test]
fn category_classes_are_distinct() {
    let all = [
        ProjectCategory::GenAi,
        ProjectCategory::MlOps,
        ProjectCategory::AgenticAi,
        ProjectCategory::Rag,
        ProjectCategory::RealTimeMl,
    ];
    let classes: HashSet<_> = all.into_iter().map(category_class).collect();
    assert_eq!(classes.len(), all.len());
    assert!(classes.iter().all(|c| c.starts_with("category category--")));
}
