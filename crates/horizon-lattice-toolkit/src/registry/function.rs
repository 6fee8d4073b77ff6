//! Named toolkit functions and their registry.

use std::collections::HashMap;
use std::fmt;

use crate::blend::{shade_node, tint_node};
use crate::config::{ConfigHandle, ToolkitConfig};
use crate::convert::convert;
use crate::registry::factory::{NodeFactory, lower};
use crate::types::{TargetUnit, ValueNode};
use crate::{Error, Result};

/// Signature shared by every toolkit function.
pub type ToolkitFn = fn(&[ValueNode], &ToolkitConfig) -> Result<ValueNode>;

/// A callable stylesheet function with a fixed arity range.
#[derive(Clone, Copy)]
pub struct ToolkitFunction {
    name: &'static str,
    min_args: usize,
    max_args: usize,
    call: ToolkitFn,
}

impl ToolkitFunction {
    /// Create a function definition.
    pub const fn new(
        name: &'static str,
        min_args: usize,
        max_args: usize,
        call: ToolkitFn,
    ) -> Self {
        Self {
            name,
            min_args,
            max_args,
            call,
        }
    }

    /// Name the function is called by in stylesheets.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fewest positional arguments accepted.
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Most positional arguments accepted.
    pub fn max_args(&self) -> usize {
        self.max_args
    }

    /// Check the argument count, then run the function.
    pub fn call(&self, args: &[ValueNode], config: &ToolkitConfig) -> Result<ValueNode> {
        if args.len() < self.min_args || args.len() > self.max_args {
            let expected = if self.min_args == self.max_args {
                self.min_args.to_string()
            } else {
                format!("{}-{}", self.min_args, self.max_args)
            };
            return Err(Error::Arity {
                name: self.name.to_string(),
                expected,
                found: args.len(),
            });
        }
        (self.call)(args, config)
    }
}

impl fmt::Debug for ToolkitFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitFunction")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

fn rem_fn(args: &[ValueNode], config: &ToolkitConfig) -> Result<ValueNode> {
    convert(&args[0], args.get(1), TargetUnit::Rem, config)
}

fn em_fn(args: &[ValueNode], config: &ToolkitConfig) -> Result<ValueNode> {
    convert(&args[0], args.get(1), TargetUnit::Em, config)
}

fn tint_fn(args: &[ValueNode], _config: &ToolkitConfig) -> Result<ValueNode> {
    tint_node(&args[0], &args[1])
}

fn shade_fn(args: &[ValueNode], _config: &ToolkitConfig) -> Result<ValueNode> {
    shade_node(&args[0], &args[1])
}

/// The built-in functions: `rem(value, base?)`, `em(value, base?)`,
/// `tint(color, percentage)` and `shade(color, percentage)`.
pub const BUILTIN_FUNCTIONS: [ToolkitFunction; 4] = [
    ToolkitFunction::new("rem", 1, 2, rem_fn),
    ToolkitFunction::new("em", 1, 2, em_fn),
    ToolkitFunction::new("tint", 2, 2, tint_fn),
    ToolkitFunction::new("shade", 2, 2, shade_fn),
];

/// A host-side function table the toolkit can install itself into.
pub trait HostFunctions {
    /// Register `function` under its name, replacing any previous entry.
    fn register(&mut self, function: ToolkitFunction);
}

impl HostFunctions for HashMap<String, ToolkitFunction> {
    fn register(&mut self, function: ToolkitFunction) {
        self.insert(function.name().to_string(), function);
    }
}

/// Maps function names to toolkit functions and evaluates calls against a
/// shared configuration.
///
/// # Example
///
/// ```
/// use horizon_lattice_toolkit::prelude::*;
///
/// let registry = FunctionRegistry::new(ConfigHandle::default());
/// let out = registry
///     .invoke("rem", &[Dimension::px(16.0).into(), Dimension::number(8.0).into()])
///     .unwrap();
/// assert_eq!(out, ValueNode::from(Dimension::with_unit(2.0, "rem")));
/// ```
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, ToolkitFunction>,
    config: ConfigHandle,
}

impl FunctionRegistry {
    /// Create a registry holding the built-in functions.
    pub fn new(config: ConfigHandle) -> Self {
        let functions = BUILTIN_FUNCTIONS.iter().map(|f| (f.name(), *f)).collect();
        Self { functions, config }
    }

    /// The configuration handle calls read from.
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&ToolkitFunction> {
        self.functions.get(name)
    }

    /// Check if a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Evaluate one call using the current configuration.
    pub fn invoke(&self, name: &str, args: &[ValueNode]) -> Result<ValueNode> {
        invoke_function(&self.functions, name, args, &self.config.snapshot())
    }

    /// Evaluate one call and build the result with a host factory.
    pub fn invoke_with<F: NodeFactory>(
        &self,
        factory: &F,
        name: &str,
        args: &[ValueNode],
    ) -> Result<F::Node> {
        self.invoke(name, args).map(|node| lower(factory, node))
    }

    /// Start a batch of calls that all see the configuration as it is now.
    pub fn batch(&self) -> Batch<'_> {
        Batch {
            functions: &self.functions,
            config: self.config.snapshot(),
        }
    }

    /// Install every function into a host table.
    pub fn load_into<H: HostFunctions + ?Sized>(&self, host: &mut H) {
        for name in self.names() {
            if let Some(function) = self.functions.get(name) {
                host.register(*function);
            }
        }
        tracing::debug!(count = self.functions.len(), "registered toolkit functions");
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(ConfigHandle::default())
    }
}

/// A set of calls evaluated against one configuration snapshot.
#[derive(Debug)]
pub struct Batch<'a> {
    functions: &'a HashMap<&'static str, ToolkitFunction>,
    config: ToolkitConfig,
}

impl Batch<'_> {
    /// The configuration this batch was started with.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Evaluate one call.
    pub fn invoke(&self, name: &str, args: &[ValueNode]) -> Result<ValueNode> {
        invoke_function(self.functions, name, args, &self.config)
    }
}

fn invoke_function(
    functions: &HashMap<&'static str, ToolkitFunction>,
    name: &str,
    args: &[ValueNode],
    config: &ToolkitConfig,
) -> Result<ValueNode> {
    let function = functions
        .get(name)
        .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
    let _span = tracing::trace_span!("toolkit_function", name).entered();
    function.call(args, config)
}
