//! Span-like attribute targets.

/// Target receiving (possibly masked) attributes.
///
/// Implemented by whatever span or event object the instrumentation layer
/// writes into; the engine only ever calls [`put_attribute`].
///
/// [`put_attribute`]: AttributeSink::put_attribute
pub trait AttributeSink {
    /// Attach one attribute to the target.
    fn put_attribute(&mut self, key: &str, value: &str);
}

/// In-memory sink collecting attributes in insertion order.
///
/// Mainly useful in tests and examples; production sinks wrap real span
/// objects.
#[derive(Debug, Default)]
pub struct BufferSink {
    attributes: Vec<(String, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl AttributeSink for BufferSink {
    fn put_attribute(&mut self, key: &str, value: &str) {
        self.attributes.push((key.to_string(), value.to_string()));
    }
}
