//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the loot
//! distribution service: API endpoints, business logic, data access, and
//! infrastructure services. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard with refresh rotation
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache, mailer, etc.)
//! - **Startup** (`startup`) - Initialization of database, cache, and services
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - One-shot delayed jobs (inactive-user deletion)
//! - **Token** (`token`) - Signed, expiring, purpose-scoped credentials
//! - **Cache** (`cache`) - Best-effort TTL cache in front of the aggregate reads
//! - **Mailer** (`mailer`) - Outbound email for registration and confirmation tokens
//! - **Wowhead** (`wowhead`) - External item-lookup API client

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mailer;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod token;
pub mod util;
pub mod wowhead;
