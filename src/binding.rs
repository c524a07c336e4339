//! Event → handler → display field routing
//!
//! A handler is registered for an event together with the fields it reads and
//! the fields it writes. Dispatching the event reads the input fields in
//! order, calls the handler and writes its return values positionally into the
//! output fields. Nothing here knows about egui; the view only fires events and
//! renders `Fields`.
//!
//! Handlers may return any `IntoOutputs` type: a plain `String` for one sink,
//! a `(String, String)` pair for two, or the shell's own result types.

use crate::types::{ClassificationResult, ModelStatus};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// No handler registered for the event
    Unbound(String),
    /// Handler returned a different number of values than bound outputs
    Arity { expected: usize, got: usize },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Unbound(event) => write!(f, "no handler bound for event {}", event),
            BindError::Arity { expected, got } => write!(
                f,
                "handler returned {} values for {} output fields",
                got, expected
            ),
        }
    }
}

impl std::error::Error for BindError {}

/// Conversion of a handler's return value into positional outputs
pub trait IntoOutputs {
    fn into_outputs(self) -> Vec<String>;
}

impl IntoOutputs for String {
    fn into_outputs(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoOutputs for (String, String) {
    fn into_outputs(self) -> Vec<String> {
        vec![self.0, self.1]
    }
}

impl IntoOutputs for ModelStatus {
    fn into_outputs(self) -> Vec<String> {
        vec![self.0]
    }
}

impl IntoOutputs for ClassificationResult {
    fn into_outputs(self) -> Vec<String> {
        vec![self.label, self.detail]
    }
}

/// Current text of every display field
#[derive(Debug, Clone)]
pub struct Fields<F> {
    values: HashMap<F, String>,
}

impl<F: Copy + Eq + Hash> Default for Fields<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<F: Copy + Eq + Hash> Fields<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Unset fields read as the empty string
    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Mutable buffer for editable widgets, created empty on first access
    pub fn buffer_mut(&mut self, field: F) -> &mut String {
        self.values.entry(field).or_default()
    }
}

type Handler = Box<dyn Fn(&[&str]) -> Vec<String>>;

struct Binding<F> {
    inputs: Vec<F>,
    outputs: Vec<F>,
    handler: Handler,
}

pub struct Binder<E, F> {
    bindings: HashMap<E, Binding<F>>,
}

impl<E, F> Default for Binder<E, F> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<E, F> Binder<E, F>
where
    E: Copy + Eq + Hash + fmt::Debug,
    F: Copy + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, replacing any earlier binding
    pub fn bind<H, R>(&mut self, event: E, inputs: &[F], outputs: &[F], handler: H)
    where
        H: Fn(&[&str]) -> R + 'static,
        R: IntoOutputs,
    {
        let binding = Binding {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
            handler: Box::new(move |args: &[&str]| handler(args).into_outputs()),
        };
        if self.bindings.insert(event, binding).is_some() {
            debug!(event = ?event, "Replaced existing binding");
        }
    }

    /// Run the handler bound to `event` and route its results.
    ///
    /// Fields are only written when the handler produced exactly one value per
    /// output field.
    pub fn dispatch(&self, event: E, fields: &mut Fields<F>) -> Result<(), BindError> {
        let binding = self
            .bindings
            .get(&event)
            .ok_or_else(|| BindError::Unbound(format!("{:?}", event)))?;

        let args: Vec<&str> = binding.inputs.iter().map(|f| fields.get(*f)).collect();
        let values = (binding.handler)(&args);

        if values.len() != binding.outputs.len() {
            return Err(BindError::Arity {
                expected: binding.outputs.len(),
                got: values.len(),
            });
        }

        debug!(event = ?event, sinks = values.len(), "Dispatching");
        for (field, value) in binding.outputs.iter().zip(values) {
            fields.set(*field, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Ev {
        Echo,
        Swap,
        Broken,
        Missing,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Sink {
        A,
        B,
        C,
    }

    fn binder() -> Binder<Ev, Sink> {
        let mut b = Binder::new();
        b.bind(Ev::Echo, &[Sink::A], &[Sink::C], |args: &[&str]| {
            format!("echo:{}", args[0])
        });
        b.bind(Ev::Swap, &[Sink::A, Sink::B], &[Sink::A, Sink::B], |args: &[&str]| {
            (args[1].to_string(), args[0].to_string())
        });
        b.bind(Ev::Broken, &[], &[Sink::A, Sink::B], |_: &[&str]| {
            "only one".to_string()
        });
        b
    }

    #[test]
    fn unset_fields_read_empty() {
        let fields: Fields<Sink> = Fields::new();
        assert_eq!(fields.get(Sink::A), "");
    }

    #[test]
    fn outputs_route_to_bound_sinks() {
        let b = binder();
        let mut fields = Fields::new().with_initial(Sink::A, "hi");
        b.dispatch(Ev::Echo, &mut fields).unwrap();
        assert_eq!(fields.get(Sink::C), "echo:hi");
        assert_eq!(fields.get(Sink::A), "hi");
    }

    #[test]
    fn outputs_are_positional() {
        let b = binder();
        let mut fields = Fields::new()
            .with_initial(Sink::A, "left")
            .with_initial(Sink::B, "right");
        b.dispatch(Ev::Swap, &mut fields).unwrap();
        assert_eq!(fields.get(Sink::A), "right");
        assert_eq!(fields.get(Sink::B), "left");
    }

    #[test]
    fn missing_input_is_passed_as_empty() {
        let b = binder();
        let mut fields = Fields::new();
        b.dispatch(Ev::Echo, &mut fields).unwrap();
        assert_eq!(fields.get(Sink::C), "echo:");
    }

    #[test]
    fn unbound_event_is_an_error() {
        let b = binder();
        let mut fields = Fields::new();
        let err = b.dispatch(Ev::Missing, &mut fields).unwrap_err();
        assert_eq!(err, BindError::Unbound("Missing".to_string()));
        assert_eq!(err.to_string(), "no handler bound for event Missing");
    }

    #[test]
    fn arity_mismatch_leaves_fields_untouched() {
        let b = binder();
        let mut fields = Fields::new()
            .with_initial(Sink::A, "a")
            .with_initial(Sink::B, "b");
        let err = b.dispatch(Ev::Broken, &mut fields).unwrap_err();
        assert_eq!(err, BindError::Arity { expected: 2, got: 1 });
        assert_eq!(fields.get(Sink::A), "a");
        assert_eq!(fields.get(Sink::B), "b");
        assert_eq!(
            err.to_string(),
            "handler returned 1 values for 2 output fields"
        );
    }

    #[test]
    fn shell_result_types_expand_in_order() {
        let result = ClassificationResult {
            label: "label".to_string(),
            detail: "detail".to_string(),
        };
        assert_eq!(result.into_outputs(), vec!["label", "detail"]);
        assert_eq!(ModelStatus("ready".to_string()).into_outputs(), vec!["ready"]);
    }

    #[test]
    fn rebinding_replaces_handler() {
        let mut b = binder();
        b.bind(Ev::Echo, &[], &[Sink::C], |_: &[&str]| "replaced".to_string());
        let mut fields = Fields::new();
        b.dispatch(Ev::Echo, &mut fields).unwrap();
        assert_eq!(fields.get(Sink::C), "replaced");
    }
}
