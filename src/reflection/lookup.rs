use tracing::trace;

use crate::reflection::{ClassMetadata, FieldMetadata, MethodMetadata};

impl ClassMetadata {
    /// First field declared as `name`. Failing that, the first field whose
    /// source-language override is `name`.
    pub fn find_field(self, name: &str) -> Option<FieldMetadata> {
        let found = self
            .fields()
            .find(|field| field.name() == name)
            .or_else(|| self.fields().find(|field| field.java_name() == name));
        if found.is_none() {
            trace!(class = self.type_name(), field = name, "no such field");
        }
        found
    }

    /// First method whose source-language name is `name`. Overloads share a
    /// name, so the one declared first wins.
    pub fn find_method(self, name: &str) -> Option<MethodMetadata> {
        let found = self.methods().find(|method| method.java_name() == name);
        if found.is_none() {
            trace!(class = self.type_name(), method = name, "no such method");
        }
        found
    }
}
