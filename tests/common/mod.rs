// tests/common/mod.rs

// Stub em processo da API do mercado: guarda as coleções como JSON,
// grava cada requisição na ordem de chegada e permite forçar falhas por
// operação. Os testes de integração apontam o ApiClient para ele.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use market_admin::models::rbac::Role;
use market_admin::models::session::SessionUser;
use market_admin::{ApiClient, ApiConfig, Session};

#[derive(Clone, Default)]
pub struct StubApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    requests: Vec<String>,
    // GETs que devolvem 403 independente do token.
    deny: HashSet<String>,
    // Operações ("POST /proveedores", "POST /images"...) que devolvem 500.
    fail: HashSet<String>,
    next_id: i64,
    uploads: usize,
}

impl StubApi {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn seed(&self, recurso: &str, entity: Value) {
        self.lock()
            .collections
            .entry(recurso.to_string())
            .or_default()
            .push(entity);
    }

    pub fn entities(&self, recurso: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(recurso)
            .cloned()
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn deny_get(&self, recurso: &str) {
        self.lock().deny.insert(recurso.to_string());
    }

    pub fn fail(&self, operacion: &str) {
        self.lock().fail.insert(operacion.to_string());
    }
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Bearer "))
        .unwrap_or(false)
}

fn id_field(recurso: &str) -> &'static str {
    match recurso {
        "categorias" => "idCategoria",
        "productos" => "idProducto",
        "proveedores" => "idProveedor",
        "metodos-pago" => "idMetodoPago",
        _ => "id",
    }
}

fn lookup(collection: &[Value], field: &str, id: &Value) -> Value {
    collection
        .iter()
        .find(|e| &e[field] == id)
        .cloned()
        .unwrap_or(Value::Null)
}

// Monta a entidade como o backend devolveria, resolvendo as referências
// estrangeiras embutidas (categoria do produto, rol do usuário).
fn build_entity(recurso: &str, id: i64, payload: &Value, inner: &Inner) -> Value {
    match recurso {
        "categorias" => json!({
            "idCategoria": id,
            "nombre": payload["nombre"],
            "descripcion": payload["descripcion"],
            "estado": true,
        }),
        "productos" => {
            let categorias = inner.collections.get("categorias").cloned().unwrap_or_default();
            json!({
                "idProducto": id,
                "nombre": payload["nombre"],
                "descripcion": payload["descripcion"],
                "imagen": payload["imagen"],
                "categoria": lookup(&categorias, "idCategoria", &payload["idCategoria"]),
                "estado": true,
            })
        }
        "proveedores" => json!({
            "idProveedor": id,
            "nombreProveedor": payload["nombreProveedor"],
            "telefono": payload["telefono"],
            "email": payload["email"],
            "direccion": payload["direccion"],
            "ruc": payload["ruc"],
            "estado": true,
        }),
        "roles" => json!({
            "id": id,
            "nombreRol": payload["nombreRol"],
            "estado": true,
        }),
        "metodos-pago" => json!({
            "idMetodoPago": id,
            "nombreMetodo": payload["nombreMetodo"],
            "estado": true,
        }),
        "usuarios" => {
            let roles = inner.collections.get("roles").cloned().unwrap_or_default();
            json!({
                "id": id,
                "nombre": payload["nombre"],
                "apellidos": payload["apellidos"],
                "email": payload["email"],
                "dni": payload["dni"],
                "telefono": payload["telefono"],
                "imagen": payload["imagen"],
                "rol": lookup(&roles, "id", &payload["rolId"]),
                "estado": true,
            })
        }
        _ => Value::Null,
    }
}

async fn list_resource(
    State(state): State<StubApi>,
    Path(recurso): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut inner = state.lock();
    inner.requests.push(format!("GET /{recurso}"));

    if inner.deny.contains(&recurso) {
        return StatusCode::FORBIDDEN.into_response();
    }
    // GET categorias é público; o resto exige bearer.
    if recurso != "categorias" && !has_bearer(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    Json(inner.collections.get(&recurso).cloned().unwrap_or_default()).into_response()
}

async fn create_resource(
    State(state): State<StubApi>,
    Path(recurso): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let mut inner = state.lock();
    inner.requests.push(format!("POST /{recurso}"));

    if inner.fail.contains(&format!("POST /{recurso}")) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    // POST usuarios é o registro, sem bearer.
    if recurso != "usuarios" && !has_bearer(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    inner.next_id += 1;
    let id = 100 + inner.next_id;
    let entity = build_entity(&recurso, id, &payload, &inner);
    inner
        .collections
        .entry(recurso)
        .or_default()
        .push(entity.clone());

    (StatusCode::CREATED, Json(entity)).into_response()
}

async fn update_resource(
    State(state): State<StubApi>,
    Path(recurso): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let mut inner = state.lock();
    inner.requests.push(format!("PUT /{recurso}"));

    if inner.fail.contains(&format!("PUT /{recurso}")) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !has_bearer(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let Some(id) = payload["id"].as_i64() else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut entity = build_entity(&recurso, id, &payload, &inner);

    let field = id_field(&recurso);
    let Some(collection) = inner.collections.get_mut(&recurso) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(existing) = collection.iter_mut().find(|e| e[field] == json!(id)) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    // O estado não muda num PUT; só o DELETE o flipa.
    entity["estado"] = existing["estado"].clone();
    *existing = entity.clone();

    Json(entity).into_response()
}

async fn toggle_resource(
    State(state): State<StubApi>,
    Path((recurso, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    let mut inner = state.lock();
    inner.requests.push(format!("DELETE /{recurso}/{id}"));

    if inner.fail.contains(&format!("DELETE /{recurso}")) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !has_bearer(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let field = id_field(&recurso);
    let Some(collection) = inner.collections.get_mut(&recurso) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(existing) = collection.iter_mut().find(|e| e[field] == json!(id)) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let estado = existing["estado"].as_bool().unwrap_or(false);
    existing["estado"] = json!(!estado);

    StatusCode::OK.into_response()
}

async fn upload_image(State(state): State<StubApi>, _body: Bytes) -> Response {
    let mut inner = state.lock();
    inner.requests.push("POST /images".to_string());

    if inner.fail.contains("POST /images") {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    inner.uploads += 1;
    format!("uploads/img-{}.png", inner.uploads).into_response()
}

async fn change_role(
    State(state): State<StubApi>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let mut inner = state.lock();
    inner.requests.push("PUT /usuarios/rol".to_string());

    if inner.fail.contains("PUT /usuarios/rol") {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !has_bearer(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let roles = inner.collections.get("roles").cloned().unwrap_or_default();
    let rol = lookup(&roles, "id", &payload["idRol"]);
    let Some(collection) = inner.collections.get_mut("usuarios") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(usuario) = collection
        .iter_mut()
        .find(|u| u["id"] == payload["idUsuario"])
    else {
        return StatusCode::NOT_FOUND.into_response();
    };

    usuario["rol"] = rol;
    StatusCode::OK.into_response()
}

// Sobe o stub numa porta efêmera e devolve o cliente já apontado.
pub async fn spawn_stub() -> (StubApi, ApiClient) {
    market_admin::common::telemetry::init();

    let state = StubApi::default();

    let app = Router::new()
        .route("/api/images", post(upload_image))
        .route("/api/usuarios/rol", put(change_role))
        .route(
            "/api/{recurso}",
            axum::routing::get(list_resource)
                .post(create_resource)
                .put(update_resource),
        )
        .route("/api/{recurso}/{id}", delete(toggle_resource))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind do stub");
    let addr = listener.local_addr().expect("local_addr do stub");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve do stub");
    });

    let config = ApiConfig::new(
        format!("http://{addr}/api/"),
        format!("http://{addr}/files/"),
    );
    (state, ApiClient::new(config))
}

// --- Sessões prontas, como chegam do fluxo de login externo ---

#[allow(dead_code)]
pub fn sesion_admin() -> Session {
    Session::authenticated(
        SessionUser {
            id: 1,
            nombre: "Carlos".to_string(),
            rol: Role {
                id: 1,
                nombre: "ADMIN".to_string(),
                estado: true,
            },
        },
        "token-admin",
    )
}

#[allow(dead_code)]
pub fn sesion_vendedor() -> Session {
    Session::authenticated(
        SessionUser {
            id: 2,
            nombre: "Ana".to_string(),
            rol: Role {
                id: 2,
                nombre: "VENDEDOR".to_string(),
                estado: true,
            },
        },
        "token-vendedor",
    )
}

// --- Seeds prontos ---

#[allow(dead_code)]
pub fn seed_categoria(stub: &StubApi, id: i64, nombre: &str, estado: bool) {
    stub.seed(
        "categorias",
        json!({ "idCategoria": id, "nombre": nombre, "descripcion": "", "estado": estado }),
    );
}

#[allow(dead_code)]
pub fn seed_rol(stub: &StubApi, id: i64, nombre: &str) {
    stub.seed("roles", json!({ "id": id, "nombreRol": nombre, "estado": true }));
}

#[allow(dead_code)]
pub fn seed_usuario(stub: &StubApi, id: i64, nombre: &str, dni: &str, rol_id: i64, rol: &str) {
    stub.seed(
        "usuarios",
        json!({
            "id": id,
            "nombre": nombre,
            "apellidos": "Test",
            "email": format!("{}@minimarket.pe", dni),
            "dni": dni,
            "telefono": "987654321",
            "imagen": "default.png",
            "rol": { "id": rol_id, "nombreRol": rol, "estado": true },
            "estado": true,
        }),
    );
}
