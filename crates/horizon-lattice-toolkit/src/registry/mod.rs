//! Function registration contract between the toolkit and a host compiler.

mod factory;
mod function;

pub use factory::{NodeFactory, ValueTreeFactory, lower};
pub use function::{
    BUILTIN_FUNCTIONS, Batch, FunctionRegistry, HostFunctions, ToolkitFn, ToolkitFunction,
};
