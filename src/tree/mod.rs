pub mod predict;
pub mod tree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::data::{weather_dataset, Record, Value};
    use crate::errors::TreeError;
    use crate::node::TreeNode;
    use crate::record;
    use crate::tree::tree::Tree;

    fn weather_features() -> Vec<String> {
        ["outlook", "humidity", "windy"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weather_tree_splits_outlook_at_root() {
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();

        match &tree.root {
            TreeNode::Feature { name, children } => {
                assert_eq!(name, "outlook");
                let edge_values: Vec<String> =
                    children.iter().map(|edge| edge.value.to_string()).collect();
                // first-occurrence order of the outlook column
                assert_eq!(edge_values, ["Sunny", "Overcast", "Rain"]);
            }
            TreeNode::Result { .. } => panic!("expected a feature node at the root"),
        }
    }

    #[test]
    fn test_weather_overcast_is_pure_yes() {
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();

        let day = record! {"outlook" => "Overcast", "humidity" => "High", "windy" => false};
        assert_eq!(tree.predict(&day), &Value::from("Yes"));
    }

    #[test]
    fn test_weather_tree_reproduces_training_labels() {
        // Every leaf of the weather tree is pure, so training rows must map
        // back to their own labels.
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();

        for record in &data {
            assert_eq!(Some(tree.predict(record)), record.get("play"));
        }
    }

    #[test]
    fn test_depth_bounded_by_feature_count() {
        let data = weather_dataset();
        let features = weather_features();
        let tree = Tree::fit(&data, "play", &features).unwrap();
        assert!(tree.depth <= features.len() + 1);
        assert!(tree.n_leaves >= 1);
    }

    #[test]
    fn test_pure_dataset_collapses_to_single_leaf() {
        let data = vec![
            record! {"outlook" => "Sunny", "play" => "Yes"},
            record! {"outlook" => "Rain", "play" => "Yes"},
        ];
        let tree = Tree::fit(&data, "play", &["outlook".to_string()]).unwrap();
        assert_eq!(tree.root, TreeNode::result(Value::from("Yes")));
        assert_eq!(tree.depth, 1);
        assert_eq!(tree.n_leaves, 1);
    }

    #[test]
    fn test_majority_leaf_when_features_exhausted() {
        let data = vec![
            record! {"color" => "red", "tasty" => "Yes"},
            record! {"color" => "red", "tasty" => "No"},
            record! {"color" => "red", "tasty" => "No"},
        ];
        let tree = Tree::fit(&data, "tasty", &[]).unwrap();
        assert_eq!(tree.root, TreeNode::result(Value::from("No")));
    }

    #[test]
    fn test_majority_tie_goes_to_first_value_reaching_max() {
        let data = vec![
            record! {"tasty" => "A"},
            record! {"tasty" => "B"},
            record! {"tasty" => "B"},
            record! {"tasty" => "A"},
        ];
        let tree = Tree::fit(&data, "tasty", &[]).unwrap();
        assert_eq!(tree.root, TreeNode::result(Value::from("B")));
    }

    #[test]
    fn test_used_feature_is_not_reused_deeper() {
        fn assert_no_reuse(node: &TreeNode, used: &mut Vec<String>) {
            if let TreeNode::Feature { name, children } = node {
                assert!(!used.contains(name));
                used.push(name.clone());
                for edge in children {
                    assert_no_reuse(&edge.child, &mut used.clone());
                }
            }
        }
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();
        assert_no_reuse(&tree.root, &mut Vec::new());
    }

    #[test]
    fn test_unseen_value_falls_back_to_first_edge() {
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();

        // Foggy was never observed: the walk takes the first outlook edge
        // (Sunny), then the first humidity edge (High), landing on "No".
        let day = record! {"outlook" => "Foggy"};
        assert_eq!(tree.predict(&day), &Value::from("No"));

        // A record with no attributes at all takes the first edge all the
        // way down.
        let blank = Record::new();
        assert_eq!(tree.predict(&blank), &Value::from("No"));
    }

    #[test]
    fn test_fit_rejects_empty_dataset() {
        let result = Tree::fit(&[], "play", &weather_features());
        assert!(matches!(result, Err(TreeError::EmptyDataset)));
    }

    #[test]
    fn test_fit_rejects_record_without_target() {
        let data = vec![
            record! {"outlook" => "Sunny", "play" => "Yes"},
            record! {"outlook" => "Rain"},
        ];
        let result = Tree::fit(&data, "play", &["outlook".to_string()]);
        assert!(matches!(result, Err(TreeError::MissingTarget(_))));
    }

    #[test]
    fn test_display_renders_splits_and_leaves() {
        let data = weather_dataset();
        let tree = Tree::fit(&data, "play", &weather_features()).unwrap();
        let rendered = format!("{}", tree);
        assert!(rendered.contains("outlook?"));
        assert!(rendered.contains("= Sunny:"));
        assert!(rendered.contains("-> Yes"));
        assert!(rendered.contains("-> No"));
    }
}
