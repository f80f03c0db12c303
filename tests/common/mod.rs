#![allow(dead_code)]
use fixture_forge::GeneratorConfig;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One node of a generated tree, relative to the fixture directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node {
    pub path: String,
    pub depth: usize,
    pub is_dir: bool,
    pub contents: Vec<u8>,
}

impl Node {
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

pub fn config(
    root: &Path,
    seed: u64,
) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        root: root.to_path_buf(),
        ..GeneratorConfig::default()
    }
}

/// Every directory and file under `target`, sorted by path. A directory's
/// depth counts from the fixture root (depth 0); a file carries the depth of
/// the directory holding it.
pub fn walk(target: &Path) -> Vec<Node> {
    let mut nodes = Vec::new();
    walk_into(target, "", 0, &mut nodes);
    nodes.sort();
    nodes
}

fn walk_into(
    dir: &Path,
    prefix: &str,
    depth: usize,
    nodes: &mut Vec<Node>,
) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        if entry.file_type().unwrap().is_dir() {
            nodes.push(Node {
                path: path.clone(),
                depth: depth + 1,
                is_dir: true,
                contents: Vec::new(),
            });
            walk_into(&entry.path(), &path, depth + 1, nodes);
        } else {
            nodes.push(Node {
                path,
                depth,
                is_dir: false,
                contents: fs::read(entry.path()).unwrap(),
            });
        }
    }
}

/// Ledger lines as `(file base name, tag)` pairs, in file order.
pub fn read_ledger(path: &Path) -> Vec<(String, String)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let (file, tag) = line.split_once('\t').expect("tab separated line");
            (file.to_owned(), tag.to_owned())
        })
        .collect()
}

/// Tags per file base name, in ledger order.
pub fn tags_by_file(ledger: &[(String, String)]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (file, tag) in ledger {
        map.entry(file.clone()).or_default().push(tag.clone());
    }
    map
}

/// `(subdirectories, files)` directly inside each directory, keyed by
/// relative path (`""` is the fixture root).
pub fn children_per_dir(nodes: &[Node]) -> BTreeMap<String, (usize, usize)> {
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    counts.insert(String::new(), (0, 0));
    for node in nodes.iter().filter(|n| n.is_dir) {
        counts.entry(node.path.clone()).or_default();
    }
    for node in nodes {
        let parent = node
            .path
            .rsplit_once('/')
            .map(|(p, _)| p.to_owned())
            .unwrap_or_default();
        let entry = counts.entry(parent).or_default();
        if node.is_dir {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }
    counts
}
