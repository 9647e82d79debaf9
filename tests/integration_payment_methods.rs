// tests/integration_payment_methods.rs

mod common;

use common::{sesion_admin, sesion_vendedor, spawn_stub};
use market_admin::screens::PaymentMethodsScreen;
use market_admin::ListOutcome;
use serde_json::json;

fn seed_metodo(stub: &common::StubApi, id: i64, nombre: &str) {
    stub.seed(
        "metodos-pago",
        json!({ "idMetodoPago": id, "nombreMetodo": nombre, "estado": true }),
    );
}

#[tokio::test]
async fn crear_y_listar_metodos() {
    let (stub, client) = spawn_stub().await;
    seed_metodo(&stub, 1, "Efectivo");

    let mut screen = PaymentMethodsScreen::new(&client, sesion_admin());
    assert_eq!(screen.enter().await, ListOutcome::Stay);

    assert!(screen.open_create());
    screen.form_mut().unwrap().fields.nombre = "Yape".to_string();
    assert_eq!(screen.save().await, ListOutcome::Stay);

    let nombres: Vec<&str> = screen
        .list
        .items()
        .iter()
        .map(|m| m.nombre.as_str())
        .collect();
    assert_eq!(nombres, vec!["Efectivo", "Yape"]);
    assert_eq!(
        stub.requests(),
        vec!["GET /metodos-pago", "POST /metodos-pago", "GET /metodos-pago"]
    );
}

#[tokio::test]
async fn toggle_ida_y_vuelta() {
    let (stub, client) = spawn_stub().await;
    seed_metodo(&stub, 1, "Efectivo");

    let mut screen = PaymentMethodsScreen::new(&client, sesion_admin());
    screen.enter().await;

    screen.toggle_status(1).await;
    assert!(!screen.list.items()[0].estado);
    screen.toggle_status(1).await;
    assert!(screen.list.items()[0].estado);

    // O refetch depois de cada DELETE é o que traz o estado novo.
    assert_eq!(
        stub.requests(),
        vec![
            "GET /metodos-pago",
            "DELETE /metodos-pago/1",
            "GET /metodos-pago",
            "DELETE /metodos-pago/1",
            "GET /metodos-pago",
        ]
    );
}

#[tokio::test]
async fn vendedor_solo_agrega() {
    let (stub, client) = spawn_stub().await;
    seed_metodo(&stub, 1, "Efectivo");

    let mut screen = PaymentMethodsScreen::new(&client, sesion_vendedor());
    screen.enter().await;

    assert!(screen.open_create());
    screen.close_modal();

    let efectivo = screen.list.items()[0].clone();
    assert!(!screen.open_edit(&efectivo));
}
