#![deny(missing_docs)]

//! # Test Emitter
//!
//! Renders the fixture-driven round-trip test for one entity: POST the
//! request fixture, assert a created status and JSON equality with the
//! response fixture. Fixture filenames pass through unchanged; no content
//! inspection happens here.

use crate::naming::plural_path_segment;

/// Generates the MockMvc round-trip test for one entity.
pub fn generate_controller_test(
    package: &str,
    entity: &str,
    request_fixture: &str,
    response_fixture: &str,
) -> String {
    let plural = plural_path_segment(entity);

    let mut code = String::new();
    code.push_str(&format!("package {}.controller;\n\n", package));
    code.push_str(
        "import org.springframework.boot.test.autoconfigure.web.servlet.AutoConfigureMockMvc;\n",
    );
    code.push_str("import org.springframework.boot.test.context.SpringBootTest;\n");
    code.push_str("import org.springframework.test.web.servlet.MockMvc;\n");
    code.push_str("import org.springframework.beans.factory.annotation.Autowired;\n");
    code.push_str("import org.junit.jupiter.api.Test;\n");
    code.push_str("import org.springframework.http.MediaType;\n");
    code.push_str("import java.nio.file.Files;\n");
    code.push_str("import java.nio.file.Paths;\n");
    code.push('\n');
    code.push_str(
        "import static org.springframework.test.web.servlet.request.MockMvcRequestBuilders.*;\n",
    );
    code.push_str(
        "import static org.springframework.test.web.servlet.result.MockMvcResultMatchers.*;\n",
    );
    code.push('\n');

    code.push_str("@SpringBootTest\n");
    code.push_str("@AutoConfigureMockMvc\n");
    code.push_str(&format!("public class {}ControllerTest {{\n\n", entity));
    code.push_str("    @Autowired\n");
    code.push_str("    private MockMvc mockMvc;\n\n");
    code.push_str("    @Test\n");
    code.push_str(&format!(
        "    public void testCreate{}() throws Exception {{\n",
        entity
    ));
    code.push_str(&format!(
        "        String requestJson = new String(Files.readAllBytes(Paths.get(\"src/test/resources/{}\")));\n",
        request_fixture
    ));
    code.push_str(&format!(
        "        String responseJson = new String(Files.readAllBytes(Paths.get(\"src/test/resources/{}\")));\n",
        response_fixture
    ));
    code.push_str(&format!(
        "        mockMvc.perform(post(\"/api/v1/{}\")\n",
        plural
    ));
    code.push_str("            .contentType(MediaType.APPLICATION_JSON)\n");
    code.push_str("            .content(requestJson))\n");
    code.push_str("            .andExpect(status().isCreated())\n");
    code.push_str("            .andExpect(content().json(responseJson));\n");
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_pass_through() {
        let code = generate_controller_test(
            "com.example.demo",
            "Order",
            "order.json",
            "order_response.json",
        );

        assert!(code.contains("Paths.get(\"src/test/resources/order.json\")"));
        assert!(code.contains("Paths.get(\"src/test/resources/order_response.json\")"));
    }

    #[test]
    fn test_exercises_the_create_operation_once() {
        let code = generate_controller_test(
            "com.example.demo",
            "Order",
            "order.json",
            "order_response.json",
        );

        assert_eq!(code.matches("mockMvc.perform").count(), 1);
        assert!(code.contains("perform(post(\"/api/v1/orders\")"));
        assert!(code.contains(".andExpect(status().isCreated())"));
        assert!(code.contains(".andExpect(content().json(responseJson));"));
        assert!(code.contains("public class OrderControllerTest {"));
        assert!(code.contains("public void testCreateOrder() throws Exception {"));
    }

    #[test]
    fn test_package_placement() {
        let code = generate_controller_test("io.acme.shop", "Cart", "cart.json", "cart_res.json");
        assert!(code.starts_with("package io.acme.shop.controller;\n"));
    }
}
