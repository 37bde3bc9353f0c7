#![deny(missing_docs)]

//! # Endpoint Emitter
//!
//! Renders the single "create" controller stub for an entity. The response
//! object is populated with literal scalar values copied verbatim from the
//! example response: a contract-first mock, not business logic. Composite
//! (object/array) response fields are intentionally left unpopulated.

use crate::naming::{accessor_suffix, plural_path_segment};
use crate::records::{FieldSpec, RecordSpec};
use crate::type_mapping::FieldType;

/// Generates the source text of the entity's controller.
///
/// `response` is the root record inferred from the response example; its
/// fields carry the example literals.
pub fn generate_controller(entity: &str, response: &RecordSpec, package: &str) -> String {
    let plural = plural_path_segment(entity);

    let mut code = String::new();
    code.push_str(&format!("package {}.controller;\n\n", package));
    code.push_str("import org.springframework.web.bind.annotation.*;\n");
    code.push_str("import org.springframework.http.ResponseEntity;\n");
    code.push_str("import org.springframework.http.HttpStatus;\n");
    code.push_str("import javax.validation.Valid;\n");
    code.push_str(&format!("import {}.model.{}Request;\n", package, entity));
    code.push_str(&format!("import {}.model.{}Response;\n", package, entity));
    code.push_str("import io.swagger.v3.oas.annotations.Operation;\n");
    code.push_str("import io.swagger.v3.oas.annotations.tags.Tag;\n");
    code.push_str("import io.swagger.v3.oas.annotations.parameters.RequestBody;\n");
    code.push_str("import io.swagger.v3.oas.annotations.responses.ApiResponse;\n");
    code.push_str("import io.swagger.v3.oas.annotations.media.Content;\n");
    code.push_str("import io.swagger.v3.oas.annotations.media.Schema;\n");
    code.push('\n');

    code.push_str(&format!("@Tag(name=\"{}\")\n", entity));
    code.push_str("@RestController\n");
    code.push_str(&format!("@RequestMapping(\"/api/v1/{}\")\n", plural));
    code.push_str(&format!("public class {}Controller {{\n\n", entity));

    code.push_str(&format!(
        "    @Operation(summary=\"Create {}\", responses={{\n",
        entity
    ));
    code.push_str(&format!(
        "        @ApiResponse(responseCode=\"201\", description=\"Created\", content=@Content(schema=@Schema(implementation={}Response.class)))\n",
        entity
    ));
    code.push_str("    })\n");
    code.push_str("    @PostMapping\n");
    code.push_str(&format!(
        "    public ResponseEntity<{e}Response> create{e}(@Valid @RequestBody {e}Request request) {{\n",
        e = entity
    ));
    code.push_str(&format!(
        "        {e}Response response = new {e}Response();\n",
        e = entity
    ));

    for field in &response.fields {
        if let Some(setter) = literal_setter(field) {
            code.push_str(&setter);
        }
    }

    code.push_str("        return ResponseEntity.status(HttpStatus.CREATED).body(response);\n");
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}

/// Concrete scalar fields get a setter call with the literal example value.
/// Strings are rendered through the JSON serializer so quoting and escaping
/// stay correct; composite and generic-object fields return `None`.
fn literal_setter(field: &FieldSpec) -> Option<String> {
    let FieldType::Scalar(ty) = &field.ty else {
        return None;
    };
    if !ty.is_concrete() {
        return None;
    }
    let example = field.example.as_ref()?;
    let literal = serde_json::to_string(example).ok()?;
    Some(format!(
        "        response.set{}({});\n",
        accessor_suffix(&field.name),
        literal
    ))
}
