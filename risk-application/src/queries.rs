pub mod registry_queries;
