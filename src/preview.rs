use crate::{config::MigrateConfig, plan::MigrationPlan};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the planned target tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
    note: Option<String>,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
            note: None,
        }
    }
}

type NodeRef = Rc<RefCell<TreeNode>>;

fn leaf_name(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Finds or creates the directory node for `path`, creating the full ancestor
/// chain under the root on the way down.
fn dir_node(lookup: &mut HashMap<PathBuf, NodeRef>, root: &NodeRef, path: &Path) -> NodeRef {
    if path.as_os_str().is_empty() {
        return Rc::clone(root);
    }

    if let Some(node) = lookup.get(path) {
        return Rc::clone(node);
    }

    let parent = dir_node(lookup, root, path.parent().unwrap_or_else(|| Path::new("")));

    let node = Rc::new(RefCell::new(TreeNode::new(leaf_name(path), false)));
    parent.borrow_mut().children.push(Rc::clone(&node));
    lookup.insert(path.to_path_buf(), Rc::clone(&node));

    node
}

fn add_file(lookup: &mut HashMap<PathBuf, NodeRef>, root: &NodeRef, path: &Path, note: Option<String>) {
    let parent = dir_node(lookup, root, path.parent().unwrap_or_else(|| Path::new("")));

    let mut node = TreeNode::new(leaf_name(path), true);
    node.note = note;

    parent.borrow_mut().children.push(Rc::new(RefCell::new(node)));
}

/// Builds the tree of everything a run would touch, returning the root node.
fn build_tree(config: &MigrateConfig, plan: &MigrationPlan) -> NodeRef {
    let root_name = leaf_name(&config.target_root);
    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    let mut lookup: HashMap<PathBuf, NodeRef> = HashMap::new();

    for dir in &plan.dirs {
        dir_node(&mut lookup, &root, dir);
    }

    for entry in &plan.migrations {
        let note = if config.source_root.join(&entry.source).exists() {
            None
        } else {
            Some(format!("source missing: {}", entry.source.display()))
        };
        add_file(&mut lookup, &root, &entry.target, note);
    }

    for entry in &plan.placeholders {
        let note = if config.target_root.join(&entry.target).exists() {
            Some("exists, kept".to_string())
        } else {
            Some("placeholder".to_string())
        };
        add_file(&mut lookup, &root, &entry.target, note);
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &NodeRef, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    match &node_borrow.note {
        Some(note) => {
            let annotation = format!("({note})");
            println!(
                "{}{}{} {}",
                prefix.yellow(),
                connector,
                name,
                annotation.yellow()
            );
        }
        None => println!("{}{}{}", prefix.yellow(), connector, name),
    }

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        print_tree(child, &child_prefix, i == len - 1);
    }
}

/// Renders the planned target tree without writing anything.
pub fn preview_plan(config: &MigrateConfig, plan: &MigrationPlan) {
    let tree_root = build_tree(config, plan);

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Dry run — planned target tree".bold().bright_blue(),
    );

    print_tree(&tree_root, "", true);

    println!(
        "\n{} {}",
        "└─".bold().bright_blue(),
        "No files were written".bright_green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::MigrationPlan;
    use tempfile::tempdir;

    #[test]
    fn tree_dedupes_directories_and_carries_all_files() {
        let temp = tempdir().expect("tempdir");
        let config = MigrateConfig::new(temp.path().join("docs"), temp.path().join("site/docs"));
        let plan = MigrationPlan::built_in();

        let root = build_tree(&config, &plan);
        let root_borrow = root.borrow();

        // five declared dirs plus the root-level intro.md
        let dirs = root_borrow.children.iter().filter(|c| !c.borrow().is_file).count();
        let files = root_borrow.children.iter().filter(|c| c.borrow().is_file).count();
        assert_eq!(dirs, 5);
        assert_eq!(files, 1);

        // features/ holds exactly one planned file even though it is both a
        // declared dir and a file parent
        let features = root_borrow
            .children
            .iter()
            .find(|c| c.borrow().name == "features")
            .expect("features dir");
        assert_eq!(features.borrow().children.len(), 1);
    }

    #[test]
    fn missing_sources_are_flagged() {
        let temp = tempdir().expect("tempdir");
        let config = MigrateConfig::new(temp.path().join("docs"), temp.path().join("site/docs"));

        let root = build_tree(&config, &MigrationPlan::built_in());
        let root_borrow = root.borrow();

        let intro = root_borrow
            .children
            .iter()
            .find(|c| c.borrow().name == "intro.md")
            .expect("intro node");
        let note = intro.borrow().note.clone().expect("note");
        assert!(note.contains("README.md"));
    }
}
