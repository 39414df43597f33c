pub mod allocator;
pub mod noop;
pub mod ports;
pub mod types;

pub use allocator::ResourceAllocator;
pub use noop::NoopAllocationModel;
pub use ports::AllocationModelPort;
pub use types::{AllocationResult, AllocationStrategy};
