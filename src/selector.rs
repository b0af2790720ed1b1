//! Selector XML rendering and output.
//!
//! A selector maps button interaction states to drawables: `state_pressed`
//! and `state_selected` both show `<name>_pressed`, everything else falls
//! through to `<name>_normal`. The two image resources are expected to
//! already exist in the project; this module only emits the XML that ties
//! them together.

use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fs;
use std::path::PathBuf;

use crate::project::ProjectRoot;

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Reject names that cannot be used as a single path segment. Resource names
/// become filenames, so separators and dot-segments are off the table.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("State name must not be empty");
    }
    if name == "." || name == ".." {
        bail!("State name {:?} is not a valid file name", name);
    }
    if name.contains(['/', '\\', '\0']) {
        bail!("State name {:?} contains a path separator", name);
    }
    Ok(())
}

/// Render the selector document for `name`. Output is deterministic: the
/// same name always produces the same bytes.
pub fn render(name: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut selector = BytesStart::new("selector");
    selector.push_attribute(("xmlns:android", ANDROID_NS));
    writer.write_event(Event::Start(selector))?;

    for state in ["android:state_pressed", "android:state_selected"] {
        let mut item = BytesStart::new("item");
        item.push_attribute(("android:drawable", format!("@drawable/{}_pressed", name).as_str()));
        item.push_attribute((state, "true"));
        writer.write_event(Event::Empty(item))?;
    }

    let mut fallback = BytesStart::new("item");
    fallback.push_attribute(("android:drawable", format!("@drawable/{}_normal", name).as_str()));
    writer.write_event(Event::Empty(fallback))?;

    writer.write_event(Event::End(BytesEnd::new("selector")))?;

    String::from_utf8(writer.into_inner()).context("Rendered selector is not valid UTF-8")
}

/// Write the selector for `name` into the project's drawable directory,
/// overwriting any existing file. Returns the written path.
pub fn write_selector(root: &ProjectRoot, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let dir = root.checked_drawable_dir()?;
    let path = dir.join(format!("{}.xml", name));
    let contents = render(name)?;

    fs::write(&path, &contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {}", path.display());
    Ok(path)
}
