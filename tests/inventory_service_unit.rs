use std::sync::Arc;

mod support;

use alexatech_core::application::commands::inventory::{
    CreateProductCommand, CreateWarehouseCommand, InventoryCommandService, RecordMovementCommand,
};
use alexatech_core::application::error::ApplicationError;
use alexatech_core::application::queries::inventory::{InventoryQueryService, KardexReportQuery};
use alexatech_core::domain::inventory::{
    MovementKind, NewProduct, NewWarehouse, ProductRepository, Sku, WarehouseRepository,
};
use alexatech_core::domain::user::Role;
use support::{
    FixedClock, InMemoryKardexRepo, InMemoryProductRepo, InMemoryWarehouseRepo, actor_with,
    admin_actor, capabilities, fixed_time,
};

struct Fixture {
    commands: InventoryCommandService,
    queries: InventoryQueryService,
}

async fn fixture_with_catalog() -> Fixture {
    let products = Arc::new(InMemoryProductRepo::new());
    let warehouses = Arc::new(InMemoryWarehouseRepo::new());
    let kardex = Arc::new(InMemoryKardexRepo::new());

    products
        .insert(NewProduct::new(Sku::new("TN-664BK").unwrap(), "Toner", fixed_time()).unwrap())
        .await
        .unwrap();
    warehouses
        .insert(NewWarehouse::new("main", "Main Warehouse", fixed_time()).unwrap())
        .await
        .unwrap();

    Fixture {
        commands: InventoryCommandService::new(
            products.clone(),
            warehouses.clone(),
            kardex.clone(),
            Arc::new(FixedClock),
        ),
        queries: InventoryQueryService::new(products, warehouses, kardex),
    }
}

fn movement(kind: MovementKind, quantity: i64) -> RecordMovementCommand {
    RecordMovementCommand {
        product_id: 1,
        warehouse_id: 1,
        kind,
        quantity,
        reference: None,
    }
}

#[tokio::test]
async fn create_product_requires_inventory_manage() {
    let fx = fixture_with_catalog().await;
    let recorder = actor_with(
        2,
        Role::Operator,
        capabilities(&[("inventory", "read"), ("inventory", "record")]),
    );

    let err = fx
        .commands
        .create_product(
            &recorder,
            CreateProductCommand {
                sku: "DR-2440".into(),
                name: "Drum Unit".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn duplicate_sku_is_a_conflict() {
    let fx = fixture_with_catalog().await;

    let err = fx
        .commands
        .create_product(
            &admin_actor(),
            CreateProductCommand {
                sku: "tn-664bk".into(),
                name: "Another Toner".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn warehouse_codes_are_uppercased() {
    let fx = fixture_with_catalog().await;

    let warehouse = fx
        .commands
        .create_warehouse(
            &admin_actor(),
            CreateWarehouseCommand {
                code: "annex".into(),
                name: "Annex".into(),
            },
        )
        .await
        .expect("create warehouse failed");
    assert_eq!(warehouse.code, "ANNEX");
}

#[tokio::test]
async fn entries_accumulate_and_exits_subtract() {
    let fx = fixture_with_catalog().await;
    let admin = admin_actor();

    let first = fx
        .commands
        .record_movement(&admin, movement(MovementKind::Entry, 10))
        .await
        .expect("entry failed");
    assert_eq!(first.balance, 10);

    let second = fx
        .commands
        .record_movement(&admin, movement(MovementKind::Exit, 4))
        .await
        .expect("exit failed");
    assert_eq!(second.balance, 6);

    let balance = fx
        .queries
        .stock_balance(&admin, 1, 1)
        .await
        .expect("balance failed");
    assert_eq!(balance, 6);
}

#[tokio::test]
async fn exit_beyond_stock_is_rejected() {
    let fx = fixture_with_catalog().await;
    let admin = admin_actor();

    fx.commands
        .record_movement(&admin, movement(MovementKind::Entry, 3))
        .await
        .expect("entry failed");

    let err = fx
        .commands
        .record_movement(&admin, movement(MovementKind::Exit, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn adjustment_overwrites_the_balance() {
    let fx = fixture_with_catalog().await;
    let admin = admin_actor();

    fx.commands
        .record_movement(&admin, movement(MovementKind::Entry, 10))
        .await
        .expect("entry failed");
    let adjusted = fx
        .commands
        .record_movement(&admin, movement(MovementKind::Adjustment, 2))
        .await
        .expect("adjustment failed");
    assert_eq!(adjusted.balance, 2);
}

#[tokio::test]
async fn movement_against_unknown_product_is_not_found() {
    let fx = fixture_with_catalog().await;

    let err = fx
        .commands
        .record_movement(
            &admin_actor(),
            RecordMovementCommand {
                product_id: 99,
                warehouse_id: 1,
                kind: MovementKind::Entry,
                quantity: 1,
                reference: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn kardex_report_rejects_inverted_date_range() {
    let fx = fixture_with_catalog().await;

    let err = fx
        .queries
        .kardex_report(
            &admin_actor(),
            KardexReportQuery {
                from: Some(fixed_time()),
                to: Some(fixed_time() - chrono::Duration::days(1)),
                ..KardexReportQuery::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn kardex_report_filters_by_kind() {
    let fx = fixture_with_catalog().await;
    let admin = admin_actor();

    fx.commands
        .record_movement(&admin, movement(MovementKind::Entry, 10))
        .await
        .unwrap();
    fx.commands
        .record_movement(&admin, movement(MovementKind::Exit, 2))
        .await
        .unwrap();

    let page = fx
        .queries
        .kardex_report(
            &admin,
            KardexReportQuery {
                kind: Some(MovementKind::Exit),
                ..KardexReportQuery::default()
            },
        )
        .await
        .expect("report failed");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].kind, MovementKind::Exit);
    assert_eq!(page.items[0].created_by, Some(1));
}

#[tokio::test]
async fn report_requires_inventory_read() {
    let fx = fixture_with_catalog().await;
    let outsider = actor_with(3, Role::Operator, capabilities(&[("clients", "read")]));

    let err = fx
        .queries
        .kardex_report(&outsider, KardexReportQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn concurrent_exits_cannot_oversell_the_stock() {
    let fx = fixture_with_catalog().await;
    let admin = admin_actor();

    fx.commands
        .record_movement(&admin, movement(MovementKind::Entry, 10))
        .await
        .expect("entry failed");

    let commands = Arc::new(fx.commands);
    let racers: Vec<_> = (0..2)
        .map(|_| {
            let commands = commands.clone();
            tokio::spawn(async move {
                commands
                    .record_movement(&admin_actor(), movement(MovementKind::Exit, 10))
                    .await
            })
        })
        .collect();

    let mut outcomes = Vec::new();
    for task in racers {
        outcomes.push(task.await.expect("task panicked"));
    }

    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .any(|r| matches!(r, Err(ApplicationError::Domain(_))))
    );

    let balance = fx
        .queries
        .stock_balance(&admin, 1, 1)
        .await
        .expect("balance failed");
    assert_eq!(balance, 0);
}
