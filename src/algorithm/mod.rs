/// Growth loop controller and engine entry points
pub mod executor;
/// Circular matching against the canonical vertex configurations
pub mod matching;
/// Boundary-shape disambiguation for free growth choices
pub mod referee;
/// Vertex arena, pools, attachment walk and rollback
pub mod registry;
/// Blueprint selection: forced service, then seeded free choice
pub mod scheduler;
