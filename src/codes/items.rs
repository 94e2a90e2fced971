//! Name-scope selectors for Set/Get and result queries

use super::symbol_table;

symbol_table! {
    /// How a `name` argument is interpreted on object Set/Get methods.
    ItemType {
        /// `name` is a single object.
        Object = 0 => "Object",
        /// `name` is a group; the operation applies to every member.
        Group = 1 => "Group",
        /// `name` is ignored; the current selection is used.
        SelectedObjects = 2 => "SelectedObjects",
    }
}

symbol_table! {
    /// How a `name` argument is interpreted on post-analysis result queries,
    /// distinguishing object-level from analysis-model-element aggregation.
    ItemTypeElm {
        /// `name` is a source object; results for its elements are reported
        /// at the object level.
        ObjectElm = 0 => "ObjectElm",
        /// `name` is an analysis-model element.
        Element = 1 => "Element",
        /// `name` is a group of objects.
        GroupElm = 2 => "GroupElm",
        /// `name` is ignored; the current selection is used.
        SelectionElm = 3 => "SelectionElm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_codes() {
        assert_eq!(ItemType::Object.code(), 0);
        assert_eq!(ItemType::SelectedObjects.code(), 2);
        assert_eq!(ItemTypeElm::ObjectElm.code(), 0);
        assert_eq!(ItemTypeElm::SelectionElm.code(), 3);
    }
}
