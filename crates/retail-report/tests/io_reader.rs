//! Integration tests for the transaction CSV reader.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use retail_report::io::{read_transactions, read_transactions_with_config, ReaderConfig};

const HEADER: &str =
    "Transaction ID,Date,Customer ID,Gender,Age,Product Category,Quantity,Price per Unit,Total Amount";

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn reads_rows_and_ignores_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\n1,2023-11-24,CUST001,Male,34,Beauty,3,50,150\n2,2023-02-27,CUST002,Female,26,Clothing,2,500,1000\n",
        HEADER
    );
    let path = write_file(&dir, "retail.csv", &content);

    let dataset = read_transactions(&path).unwrap();
    assert_eq!(dataset.len(), 2);

    let first = &dataset.transactions()[0];
    assert_eq!(first.transaction_id, "1");
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 11, 24).unwrap());
    assert_eq!(first.age, 34);
    assert_eq!(first.gender, "Male");
    assert_eq!(first.product_category, "Beauty");
    assert_eq!(first.quantity, 3);
    assert_eq!(first.total_amount, 150.0);
}

#[test]
fn header_lookup_ignores_case_and_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let content = "transaction id, DATE ,age,gender,product category,quantity,total amount\nT1,2023-01-01,30,M,Clothing,2,40.00\n";
    let path = write_file(&dir, "lower.csv", content);
    let dataset = read_transactions(&path).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.transactions()[0].total_amount, 40.0);
}

#[test]
fn header_only_file_is_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.csv", &format!("{}\n", HEADER));
    let dataset = read_transactions(&path).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn tsv_extension_switches_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let content = "Transaction ID\tDate\tAge\tGender\tProduct Category\tQuantity\tTotal Amount\nT1\t2023-01-01\t30\tF\tBeauty\t1\t20.5\n";
    let path = write_file(&dir, "retail.tsv", content);
    let dataset = read_transactions(&path).unwrap();
    assert_eq!(dataset.transactions()[0].total_amount, 20.5);
}

#[test]
fn custom_column_names_and_date_format() {
    let dir = tempfile::tempdir().unwrap();
    let content = "id,day,age,sex,category,qty,amount\nA,01/02/2023,41,F,Electronics,1,300\n";
    let path = write_file(&dir, "custom.csv", content);
    let config = ReaderConfig {
        transaction_id_column: "id".to_string(),
        date_column: "day".to_string(),
        age_column: "age".to_string(),
        gender_column: "sex".to_string(),
        product_category_column: "category".to_string(),
        quantity_column: "qty".to_string(),
        total_amount_column: "amount".to_string(),
        date_format: "%d/%m/%Y".to_string(),
        delimiter: None,
    };
    let dataset = read_transactions_with_config(&path, &config).unwrap();
    assert_eq!(
        dataset.transactions()[0].date,
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    );
}

#[test]
fn missing_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let content = "Transaction ID,Date,Age,Gender,Quantity,Total Amount\n1,2023-01-01,30,M,1,10\n";
    let path = write_file(&dir, "missing.csv", content);
    let err = read_transactions(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Product Category"));
}

#[test]
fn bad_date_reports_row_and_value() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\n1,2023-01-01,C1,Male,30,Beauty,1,10,10\n2,24/11/2023,C2,Male,30,Beauty,1,10,10\n",
        HEADER
    );
    let path = write_file(&dir, "bad_date.csv", &content);
    let message = format!("{:#}", read_transactions(&path).unwrap_err());
    assert!(message.contains("row 2"), "{}", message);
    assert!(message.contains("24/11/2023"), "{}", message);
}

#[test]
fn negative_quantity_fails_type_coercion() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("{}\n1,2023-01-01,C1,Male,30,Beauty,-1,10,10\n", HEADER);
    let path = write_file(&dir, "negative.csv", &content);
    let message = format!("{:#}", read_transactions(&path).unwrap_err());
    assert!(message.contains("Quantity"), "{}", message);
}

#[test]
fn non_finite_amount_is_rejected() {
    for bad in ["NaN", "inf", "-inf"] {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{}\n1,2023-01-01,C1,Male,30,Beauty,1,10,10\n2,2023-01-02,C2,Female,40,Beauty,1,10,{}\n",
            HEADER, bad
        );
        let path = write_file(&dir, "non_finite.csv", &content);
        let message = format!("{:#}", read_transactions(&path).unwrap_err());
        assert!(message.contains("Total Amount"), "{}", message);
        assert!(message.contains("row 2"), "{}", message);
        assert!(message.contains("finite"), "{}", message);
    }
}

#[test]
fn nonexistent_file_is_an_error() {
    assert!(read_transactions("/nonexistent/retail_sales_dataset.csv").is_err());
}
