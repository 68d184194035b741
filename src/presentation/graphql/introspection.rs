use async_graphql_parser::types::{DocumentOperations, Selection, SelectionSet};

const INTROSPECTION_FIELDS: &[&str] = &["__schema", "__type"];

/// True when any operation or fragment in `query` selects `__schema` or `__type`.
/// Unparseable documents return false and are left for the executor to reject.
pub fn requests_introspection(query: &str) -> bool {
    let Ok(doc) = async_graphql_parser::parse_query(query) else {
        return false;
    };
    let in_operations = match &doc.operations {
        DocumentOperations::Single(op) => selects_introspection(&op.node.selection_set.node),
        DocumentOperations::Multiple(ops) => ops
            .values()
            .any(|op| selects_introspection(&op.node.selection_set.node)),
    };
    in_operations
        || doc
            .fragments
            .values()
            .any(|f| selects_introspection(&f.node.selection_set.node))
}

fn selects_introspection(set: &SelectionSet) -> bool {
    set.items.iter().any(|item| match &item.node {
        Selection::Field(field) => {
            INTROSPECTION_FIELDS.contains(&field.node.name.node.as_str())
                || selects_introspection(&field.node.selection_set.node)
        }
        Selection::InlineFragment(fragment) => {
            selects_introspection(&fragment.node.selection_set.node)
        }
        // Named fragments are checked through `doc.fragments`.
        Selection::FragmentSpread(_) => false,
    })
}
