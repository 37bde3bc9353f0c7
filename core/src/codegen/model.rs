#![deny(missing_docs)]

//! # Model Emitter
//!
//! Renders one record spec into a Java model class: deduplicated imports in
//! sorted order, a class-level description annotation, annotated private
//! fields in stored order, then getter/setter pairs in a second pass.
//!
//! Nested records are emitted as independent top-level classes sharing the
//! `model` package, not as inner classes.

use crate::naming::accessor_suffix;
use crate::records::{RecordSpec, SCHEMA_IMPORT};
use std::collections::BTreeSet;

/// Generates the source text of one model class.
pub fn generate_model_class(record: &RecordSpec, package: &str) -> String {
    let mut code = String::new();
    code.push_str(&format!("package {}.model;\n", package));
    code.push('\n');

    // The class-level @Schema is emitted unconditionally, so its import is
    // seeded rather than derived from field scanning.
    let mut imports = BTreeSet::new();
    imports.insert(SCHEMA_IMPORT);
    for field in &record.fields {
        for annotation in &field.annotations {
            imports.insert(annotation.import());
        }
        if field.ty.needs_list_import() {
            imports.insert("import java.util.List;");
        }
    }
    for import in &imports {
        code.push_str(import);
        code.push('\n');
    }
    code.push('\n');

    code.push_str(&format!("@Schema(description=\"{}\")\n", record.name));
    code.push_str(&format!("public class {} {{\n", record.name));

    for field in &record.fields {
        for annotation in &field.annotations {
            code.push_str(&format!("    {}\n", annotation));
        }
        code.push_str(&format!("    private {} {};\n\n", field.ty, field.name));
    }

    for field in &record.fields {
        let suffix = accessor_suffix(&field.name);
        code.push_str(&format!("    public {} get{}() {{\n", field.ty, suffix));
        code.push_str(&format!("        return {};\n", field.name));
        code.push_str("    }\n\n");
        code.push_str(&format!(
            "    public void set{}({} {}) {{\n",
            suffix, field.ty, field.name
        ));
        code.push_str(&format!("        this.{} = {};\n", field.name, field.name));
        code.push_str("    }\n\n");
    }

    code.push_str("}\n");
    code
}
