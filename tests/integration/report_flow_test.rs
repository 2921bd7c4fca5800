// Reporting over the service layer: seeded store -> filtered aggregate report.

use chrono::NaiveDate;
use fluxo::expenses::models::{
    ExpenseFilter, ExpenseRecord, ExpenseStatus, ExpenseSubmission, PaymentMode,
};
use fluxo::expenses::repositories::InMemoryExpenseRepository;
use fluxo::expenses::services::ExpenseService;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn seeded_record(
    due: &str,
    category: &str,
    description: &str,
    value: Decimal,
    status: ExpenseStatus,
) -> ExpenseRecord {
    ExpenseRecord::new(
        due.parse().unwrap(),
        category.to_string(),
        description.to_string(),
        value,
        status,
        PaymentMode::Single,
        1,
        1,
    )
    .unwrap()
}

fn seeded_service() -> ExpenseService<InMemoryExpenseRepository> {
    let repository = InMemoryExpenseRepository::with_records(vec![
        seeded_record("2025-04-05", "Fixo", "Aluguel", dec!(150), ExpenseStatus::Paid),
        seeded_record("2025-04-12", "Fixo", "Energia", dec!(300), ExpenseStatus::Pending),
        seeded_record("2025-05-01", "Variável", "Combustível", dec!(50), ExpenseStatus::Cancelled),
    ]);
    ExpenseService::new(repository)
}

fn reference(date: &str) -> NaiveDate {
    date.parse().unwrap()
}

#[tokio::test]
async fn test_unfiltered_report_over_seeded_store() {
    let service = seeded_service();

    let report = service.report(None, reference("2025-04-20")).await.unwrap();

    assert_eq!(report.total_value, dec!(500));
    assert_eq!(report.category_total("Fixo"), dec!(450));
    assert_eq!(report.category_total("Variável"), dec!(50));
    assert_eq!(report.current_month_total, dec!(450));
    assert_eq!(report.status_count(ExpenseStatus::Paid), 1);
    assert_eq!(report.status_count(ExpenseStatus::Pending), 1);
    assert_eq!(report.status_count(ExpenseStatus::Cancelled), 1);
}

#[tokio::test]
async fn test_category_filtered_report() {
    let service = seeded_service();
    let filter = ExpenseFilter::all().with_category("Fixo");

    let report = service
        .report(Some(&filter), reference("2025-04-20"))
        .await
        .unwrap();

    assert_eq!(report.total_value, dec!(450));
    assert_eq!(report.by_category.len(), 1);
    assert_eq!(report.by_month.len(), 1);
    assert_eq!(report.month_total("2025-04"), dec!(450));
}

#[tokio::test]
async fn test_created_installments_show_up_in_reports() {
    let service = ExpenseService::new(InMemoryExpenseRepository::new());

    let submission = ExpenseSubmission::new(
        dec!(1200),
        "2025-04-10".parse().unwrap(),
        "Investimento",
        "Notebooks",
        PaymentMode::Installment,
        4,
    );
    service.create(&submission).await.unwrap();

    let report = service.report(None, reference("2025-06-01")).await.unwrap();

    assert_eq!(report.total_value, dec!(4800));
    assert_eq!(report.by_month.len(), 4);
    assert_eq!(report.current_month_total, dec!(1200));

    // Months arrive in expansion order, already chronological
    let months: Vec<&str> = report.by_month.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2025-04", "2025-05", "2025-06", "2025-07"]);
}

#[tokio::test]
async fn test_report_reflects_status_changes() {
    let service = seeded_service();

    let stored = service.list().await.unwrap();
    service
        .set_status(stored[1].id, ExpenseStatus::Paid)
        .await
        .unwrap();

    let paid_only = ExpenseFilter::all().with_status(ExpenseStatus::Paid);
    let report = service
        .report(Some(&paid_only), reference("2025-04-20"))
        .await
        .unwrap();

    assert_eq!(report.total_value, dec!(450));
    assert_eq!(report.status_count(ExpenseStatus::Paid), 2);
}

#[tokio::test]
async fn test_report_now_over_empty_store_is_empty() {
    let service = ExpenseService::new(InMemoryExpenseRepository::new());

    let report = service.report_now(None).await.unwrap();

    assert!(report.is_empty());
    assert_eq!(report.total_value, dec!(0));
    assert_eq!(report.status_counts.len(), 3);
}
