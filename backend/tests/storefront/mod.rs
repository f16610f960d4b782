//! In-memory repositories and app wiring for storefront endpoint tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use storefront_backend::Trace;
use storefront_backend::domain::ports::{
    ClientRepository, ClientRepositoryError, OrderRepository, OrderRepositoryError,
    ProductRepository, ProductRepositoryError,
};
use storefront_backend::domain::{
    Client, ClientDraft, ClientService, NewOrder, Order, OrderHeader, OrderLine, OrderService,
    Product, ProductDraft, ProductService,
};
use storefront_backend::inbound::http;
use storefront_backend::inbound::http::error::route_not_found;
use storefront_backend::inbound::http::state::HttpState;

const TAX_RATE: Decimal = dec!(0.15);

/// Client table kept in memory; identifiers start at 1.
#[derive(Default)]
pub struct InMemoryClients {
    rows: Mutex<Vec<Client>>,
}

impl InMemoryClients {
    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Client>> {
        self.rows.lock().expect("client table lock")
    }
}

#[async_trait]
impl ClientRepository for InMemoryClients {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        Ok(self.rows().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ClientRepositoryError> {
        Ok(self.rows().iter().find(|client| client.id == id).cloned())
    }

    async fn insert(&self, draft: &ClientDraft) -> Result<Client, ClientRepositoryError> {
        let mut rows = self.rows();
        if rows.iter().any(|client| client.identity == draft.identity) {
            return Err(ClientRepositoryError::rejected(
                2_i32,
                "La identidad ya está registrada",
            ));
        }
        let client = Client {
            id: i64::try_from(rows.len()).expect("row count fits i64") + 1,
            name: draft.name.clone(),
            identity: draft.identity.clone(),
        };
        rows.push(client.clone());
        Ok(client)
    }

    async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let mut rows = self.rows();
        let slot = rows
            .iter_mut()
            .find(|stored| stored.id == client.id)
            .ok_or(ClientRepositoryError::Missing)?;
        *slot = client.clone();
        Ok(client.clone())
    }
}

/// Product table kept in memory; identifiers start at 1.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.rows.lock().expect("product table lock")
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(self.rows().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self.rows().iter().find(|product| product.id == id).cloned())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut rows = self.rows();
        let product = Product {
            id: i64::try_from(rows.len()).expect("row count fits i64") + 1,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            stock: draft.stock,
        };
        rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError> {
        let mut rows = self.rows();
        let slot = rows
            .iter_mut()
            .find(|stored| stored.id == product.id)
            .ok_or(ProductRepositoryError::Missing)?;
        *slot = product.clone();
        Ok(product.clone())
    }
}

/// Order procedure double that prices lines from the in-memory tables.
pub struct InMemoryOrders {
    clients: Arc<InMemoryClients>,
    products: Arc<InMemoryProducts>,
    calls: AtomicUsize,
}

impl InMemoryOrders {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let client = self
            .clients
            .find_by_id(order.client_id())
            .await
            .map_err(|err| OrderRepositoryError::query(err.to_string()))?
            .ok_or_else(|| OrderRepositoryError::rejected(1_i32, "El cliente no existe"))?;

        let mut lines = Vec::with_capacity(order.lines().len());
        for (request, id) in order.lines().iter().zip(1_i64..) {
            let product = self
                .products
                .find_by_id(request.product_id)
                .await
                .map_err(|err| OrderRepositoryError::query(err.to_string()))?
                .ok_or_else(|| {
                    OrderRepositoryError::rejected(
                        2_i32,
                        format!("El producto {} no existe", request.product_id),
                    )
                })?;
            let subtotal = product.price * Decimal::from(request.quantity);
            let tax = (subtotal * TAX_RATE).round_dp(2);
            lines.push(OrderLine {
                id,
                order_id: 1,
                product_id: product.id,
                product_name: product.name,
                quantity: request.quantity,
                subtotal,
                tax,
                total: subtotal + tax,
            });
        }

        let subtotal = lines.iter().map(|line| line.subtotal).sum();
        let tax = lines.iter().map(|line| line.tax).sum();
        let total = lines.iter().map(|line| line.total).sum();
        let header = OrderHeader {
            id: 1,
            client_id: client.id,
            client_name: client.name,
            subtotal,
            tax,
            total,
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|d| d.and_hms_opt(9, 15, 0))
                .expect("fixture timestamp"),
        };
        Ok(Order::compose(header, lines))
    }
}

/// Repository doubles shared between the app and test assertions.
pub struct Store {
    pub clients: Arc<InMemoryClients>,
    pub products: Arc<InMemoryProducts>,
    pub orders: Arc<InMemoryOrders>,
}

impl Store {
    pub fn new() -> Self {
        let clients = Arc::new(InMemoryClients::default());
        let products = Arc::new(InMemoryProducts::default());
        let orders = Arc::new(InMemoryOrders {
            clients: clients.clone(),
            products: products.clone(),
            calls: AtomicUsize::new(0),
        });
        Self {
            clients,
            products,
            orders,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState::new(
            Arc::new(ClientService::new(self.clients.clone())),
            Arc::new(ProductService::new(self.products.clone())),
            Arc::new(OrderService::new(self.orders.clone())),
        )
    }
}

/// Client repository whose every call fails to connect.
pub struct UnreachableClients;

#[async_trait]
impl ClientRepository for UnreachableClients {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        Err(ClientRepositoryError::connection("connection refused"))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Client>, ClientRepositoryError> {
        Err(ClientRepositoryError::connection("connection refused"))
    }

    async fn insert(&self, _draft: &ClientDraft) -> Result<Client, ClientRepositoryError> {
        Err(ClientRepositoryError::connection("connection refused"))
    }

    async fn update(&self, _client: &Client) -> Result<Client, ClientRepositoryError> {
        Err(ClientRepositoryError::connection("connection refused"))
    }
}

/// The storefront app as the server assembles it, minus health checks.
pub fn storefront_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(http::configure)
        .default_service(web::to(route_not_found))
}
