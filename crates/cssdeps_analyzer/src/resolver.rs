use cssdeps_core::path_key;
use log::{debug, trace};
use std::{collections::HashMap, path::Path};

use crate::{
    index::ClassIndex,
    types::{ImportedFileSet, RequiredFile, UsedClassSet, class_key},
};

/// Pairs each style sheet that defines one of `used` classes, and is not
/// already imported by `component`, with the classes it satisfies.
///
/// Files are emitted in the order they are first reached while walking the
/// used classes. A class defined in several files is attributed to each of
/// them. Classes with no definition anywhere contribute nothing.
pub fn resolve_required_files(
    component: &Path,
    used: &UsedClassSet,
    index: &ClassIndex,
    imported: &ImportedFileSet,
) -> Vec<RequiredFile> {
    trace!("Resolving {} used classes for {}", used.len(), component.display());
    let mut required: Vec<RequiredFile> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for class_name in used.iter() {
        let Some(files) = index.defining_files(class_name) else {
            trace!("Class '{}' is not defined in any style sheet", class_name);
            continue;
        };

        for file in files {
            if imported.contains(file) {
                trace!("'{}' already covered by import of {}", class_name, file.display());
                continue;
            }

            let slot = *slots.entry(path_key(file)).or_insert_with(|| {
                required.push(RequiredFile { file: file.clone(), classes_used: Vec::new() });
                required.len() - 1
            });
            // Files differing only by case share a slot; keep the class once.
            let classes = &mut required[slot].classes_used;
            if !classes.iter().any(|c| class_key(c) == class_key(class_name)) {
                classes.push(class_name.to_string());
            }
        }
    }

    debug!("{} requires {} style sheets", component.display(), required.len());
    required
}
