//! Customer domain ports
//!
//! The `CustomerPort` trait defines everything the customer domain needs
//! from its data source. Adapters implement it: a database adapter in the
//! persistence layer, or the in-memory mock here for tests. The domain
//! depends on the trait shape only and never performs I/O itself.
//!
//! Callers are responsible for concurrency discipline: at most one
//! mutating operation per customer at a time, enforced at the adapter
//! boundary (per-aggregate locking or optimistic retry).

use async_trait::async_trait;

use core_kernel::{CustomerId, DomainPort, PortError};

use crate::customer::Customer;
use crate::email::Email;

/// The main port trait for customer persistence
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait CustomerPort: DomainPort {
    /// Retrieves a customer by ID
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if no customer has this ID.
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, PortError>;

    /// Finds the customer holding this email, if any
    ///
    /// Matching uses the domain's case-insensitive email equality.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, PortError>;

    /// Lists all customers
    async fn list_customers(&self) -> Result<Vec<Customer>, PortError>;

    /// Persists a customer, inserting or replacing by ID
    ///
    /// # Errors
    ///
    /// Returns `PortError::Conflict` if saving would leave two customers
    /// sharing an email.
    async fn save_customer(&self, customer: &Customer) -> Result<(), PortError>;

    /// Checks whether a customer exists
    async fn exists(&self, id: CustomerId) -> Result<bool, PortError>;
}

/// In-memory implementation of CustomerPort for testing
///
/// Stores customers in a map and enforces the email uniqueness rule the
/// production adapter would enforce with a unique index.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tracing::debug;

    /// In-memory mock implementation of CustomerPort
    #[derive(Debug, Default)]
    pub struct MockCustomerPort {
        customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    }

    impl MockCustomerPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port with customers for testing
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let port = Self::new();
            for customer in customers {
                port.customers
                    .write()
                    .await
                    .insert(customer.id(), customer);
            }
            port
        }
    }

    impl DomainPort for MockCustomerPort {}

    #[async_trait]
    impl CustomerPort for MockCustomerPort {
        async fn get_customer(&self, id: CustomerId) -> Result<Customer, PortError> {
            debug!("fetching customer {}", id);
            self.customers
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Customer", id))
        }

        async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, PortError> {
            debug!("finding customer by email");
            Ok(self
                .customers
                .read()
                .await
                .values()
                .find(|customer| customer.email() == email)
                .cloned())
        }

        async fn list_customers(&self) -> Result<Vec<Customer>, PortError> {
            debug!("listing customers");
            Ok(self.customers.read().await.values().cloned().collect())
        }

        async fn save_customer(&self, customer: &Customer) -> Result<(), PortError> {
            debug!("saving customer {}", customer.id());
            let mut customers = self.customers.write().await;
            let email_taken = customers
                .values()
                .any(|other| other.id() != customer.id() && other.email() == customer.email());
            if email_taken {
                return Err(PortError::conflict(format!(
                    "email is already in use: {}",
                    customer.email()
                )));
            }
            customers.insert(customer.id(), customer.clone());
            Ok(())
        }

        async fn exists(&self, id: CustomerId) -> Result<bool, PortError> {
            Ok(self.customers.read().await.contains_key(&id))
        }
    }
}
