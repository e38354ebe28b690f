// Feature modules - Domain Driven Design
// Each module: domain (pure logic) -> application (orchestration) -> infrastructure (adapters)

pub mod catalog; // Cross-provider catalog aggregation
