// tests/integration_products.rs

mod common;

use common::{seed_categoria, sesion_admin, spawn_stub};
use market_admin::screens::ProductsScreen;
use market_admin::ListOutcome;
use serde_json::json;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn imagen_persistida_es_la_referencia_del_upload() {
    let (stub, client) = spawn_stub().await;
    seed_categoria(&stub, 1, "Lácteos", true);

    let mut screen = ProductsScreen::new(&client, sesion_admin());
    screen.enter().await;

    assert!(screen.open_create());
    {
        let form = screen.form_mut().unwrap();
        form.fields.nombre = "Leche Gloria".to_string();
        form.fields.descripcion = "Tarro 400g".to_string();
        form.fields.id_categoria = Some(1);
        form.select_image("leche.png", PNG_MAGIC.to_vec()).unwrap();
    }
    assert_eq!(screen.save().await, ListOutcome::Stay);

    // O campo `imagen` gravado é a referência devolvida pelo upload,
    // nunca o data URI do preview.
    let productos = stub.entities("productos");
    assert_eq!(productos.len(), 1);
    assert_eq!(productos[0]["imagen"], json!("uploads/img-1.png"));

    // O upload precede o POST do produto.
    let requests = stub.requests();
    let upload = requests.iter().position(|r| r == "POST /images").unwrap();
    let create = requests.iter().position(|r| r == "POST /productos").unwrap();
    assert!(upload < create);
}

#[tokio::test]
async fn upload_fallido_aborta_la_gravacion() {
    let (stub, client) = spawn_stub().await;
    seed_categoria(&stub, 1, "Lácteos", true);
    stub.fail("POST /images");

    let mut screen = ProductsScreen::new(&client, sesion_admin());
    screen.enter().await;

    assert!(screen.open_create());
    {
        let form = screen.form_mut().unwrap();
        form.fields.nombre = "Yogurt".to_string();
        form.fields.id_categoria = Some(1);
        form.select_image("yogurt.png", PNG_MAGIC.to_vec()).unwrap();
    }
    assert_eq!(screen.save().await, ListOutcome::Stay);

    // O modal segue aberto e o POST do produto nunca saiu.
    assert!(screen.form_mut().is_some());
    let requests = stub.requests();
    assert!(requests.iter().any(|r| r == "POST /images"));
    assert!(!requests.iter().any(|r| r == "POST /productos"));
    assert!(stub.entities("productos").is_empty());
}

#[tokio::test]
async fn edicion_sin_archivo_nuevo_conserva_la_referencia() {
    let (stub, client) = spawn_stub().await;
    seed_categoria(&stub, 1, "Lácteos", true);
    stub.seed(
        "productos",
        json!({
            "idProducto": 10,
            "nombre": "Queso fresco",
            "descripcion": "",
            "imagen": "uploads/queso.png",
            "categoria": { "idCategoria": 1, "nombre": "Lácteos", "descripcion": "", "estado": true },
            "estado": true,
        }),
    );

    let mut screen = ProductsScreen::new(&client, sesion_admin());
    screen.enter().await;

    let queso = screen.list.items()[0].clone();
    assert!(screen.open_edit(&queso));
    screen.form_mut().unwrap().fields.nombre = "Queso fresco Laive".to_string();
    assert_eq!(screen.save().await, ListOutcome::Stay);

    // Sem arquivo novo não há upload e a referência antiga permanece.
    assert!(!stub.requests().iter().any(|r| r == "POST /images"));
    let productos = stub.entities("productos");
    assert_eq!(productos[0]["imagen"], json!("uploads/queso.png"));
    assert_eq!(productos[0]["nombre"], json!("Queso fresco Laive"));
}

#[tokio::test]
async fn desplegable_solo_con_categorias_activas() {
    let (stub, client) = spawn_stub().await;
    seed_categoria(&stub, 1, "Lácteos", true);
    seed_categoria(&stub, 2, "Descontinuados", false);

    let mut screen = ProductsScreen::new(&client, sesion_admin());
    screen.enter().await;

    let opciones: Vec<&str> = screen
        .category_options()
        .iter()
        .map(|c| c.nombre.as_str())
        .collect();
    assert_eq!(opciones, vec!["Lácteos"]);
}

#[tokio::test]
async fn sin_categoria_seleccionada_no_hay_post() {
    let (stub, client) = spawn_stub().await;
    seed_categoria(&stub, 1, "Lácteos", true);

    let mut screen = ProductsScreen::new(&client, sesion_admin());
    screen.enter().await;

    assert!(screen.open_create());
    screen.form_mut().unwrap().fields.nombre = "Leche".to_string();
    assert_eq!(screen.save().await, ListOutcome::Stay);

    assert!(screen.form_mut().unwrap().field_error("id_categoria"));
    assert!(!stub.requests().iter().any(|r| r == "POST /productos"));
}
