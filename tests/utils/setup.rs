use super::{request::RequestBuilder, JWT_SECRET};
use http::StatusCode;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use ssda_backend::State;
use std::{net::SocketAddr, sync::Arc};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;

async fn setup_database() -> (ContainerAsync<Postgres>, DbConn) {
    let container = Postgres::default().with_tag("16").start().await.unwrap();

    let connection_string = format!(
        "postgres://postgres:postgres@{}:{}/postgres",
        container.get_host().await.unwrap(),
        container.get_host_port_ipv4(5432).await.unwrap(),
    );

    let opts = ConnectOptions::new(connection_string);
    let db = Database::connect(opts).await.unwrap();

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    (container, db)
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db, JWT_SECRET);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        ssda_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[allow(unused)]
pub async fn setup() -> Env {
    let (container, db) = setup_database().await;

    let addr = setup_backend(db).await;

    Env {
        addr,
        client: Client::new(),
        _container: Arc::new(container),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub _container: Arc<ContainerAsync<Postgres>>,
}

impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }
}

static STUDENT_COUNT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

impl Env {
    #[allow(unused)]
    pub async fn create_document(&self, name: &str, attendance_deadline: i32) -> i64 {
        let res = self
            .post("/documents")
            .json(&json!({
                "name": name,
                "description": format!("{name} description"),
                "attendance_deadline": attendance_deadline,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        body["id"].as_i64().expect("no document id")
    }

    /// Creates a student with a fresh RA and returns `(id, ra)`.
    #[allow(unused)]
    pub async fn create_student(&self) -> (i64, String) {
        let number = STUDENT_COUNT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let ra = format!("RA{number:05}");

        let res = self
            .post("/students")
            .json(&student_json(&ra))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        (body["id"].as_i64().expect("no student id"), ra)
    }

    #[allow(unused)]
    pub async fn create_solicitation(&self, student: i64, document: i64, priority: bool) -> i64 {
        let res = self
            .post("/solicitations")
            .json(&json!({
                "student_id": student,
                "document_id": document,
                "priority": priority,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        body["id"].as_i64().expect("no solicitation id")
    }

    #[allow(unused)]
    pub async fn set_status(&self, solicitation: i64, status: &str) {
        let res = self
            .put(&format!("/solicitations/{solicitation}"))
            .json(&json!({ "status": status }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}

#[allow(unused)]
pub fn student_json(ra: &str) -> Value {
    json!({
        "ra": ra,
        "name": "Ana Souza",
        "email": "ana.souza@example.com",
        "phone": "(11) 3456-7890",
        "cellphone": "(11) 91234-5678",
        "course": "Análise e Desenvolvimento de Sistemas",
        "period": 3,
    })
}
