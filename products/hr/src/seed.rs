//! The fixed demo dataset the suite starts with.
//!
//! Nothing persists or mutates these across sessions; the collections are
//! rebuilt from here on every start.

use chrono::NaiveDate;
use entity::employee::{self, EmergencyContact, Employee};
use entity::leave_request::{self, LeaveRequest};
use entity::{BiMetrics, Department, PayrollRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".into(),
            first_name: "Ahmet".into(),
            last_name: "Yılmaz".into(),
            national_id: "12345678901".into(),
            email: "ahmet.yilmaz@sirket.com".into(),
            phone: "+90 532 123 4567".into(),
            department: "Yazılım Geliştirme".into(),
            position: "Senior Developer".into(),
            start_date: date(2020, 3, 15),
            salary: 25_000,
            status: employee::Status::Active,
            social_insurance_no: Some("SGK123456".into()),
            birth_date: date(1985, 7, 12),
            address: "Kadıköy, İstanbul".into(),
            emergency_contact: EmergencyContact {
                name: "Fatma Yılmaz".into(),
                phone: "+90 532 987 6543".into(),
                relation: "Eş".into(),
            },
        },
        Employee {
            id: "2".into(),
            first_name: "Ayşe".into(),
            last_name: "Demir".into(),
            national_id: "23456789012".into(),
            email: "ayse.demir@sirket.com".into(),
            phone: "+90 533 234 5678".into(),
            department: "İnsan Kaynakları".into(),
            position: "İK Uzmanı".into(),
            start_date: date(2019, 6, 1),
            salary: 18_000,
            status: employee::Status::Active,
            social_insurance_no: Some("SGK234567".into()),
            birth_date: date(1988, 3, 22),
            address: "Beşiktaş, İstanbul".into(),
            emergency_contact: EmergencyContact {
                name: "Mehmet Demir".into(),
                phone: "+90 533 876 5432".into(),
                relation: "Baba".into(),
            },
        },
        Employee {
            id: "3".into(),
            first_name: "Mehmet".into(),
            last_name: "Kaya".into(),
            national_id: "34567890123".into(),
            email: "mehmet.kaya@sirket.com".into(),
            phone: "+90 534 345 6789".into(),
            department: "Finans".into(),
            position: "Muhasebe Uzmanı".into(),
            start_date: date(2021, 1, 10),
            salary: 16_000,
            status: employee::Status::Active,
            social_insurance_no: Some("SGK345678".into()),
            birth_date: date(1990, 11, 8),
            address: "Şişli, İstanbul".into(),
            emergency_contact: EmergencyContact {
                name: "Zeynep Kaya".into(),
                phone: "+90 534 765 4321".into(),
                relation: "Eş".into(),
            },
        },
    ]
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "1".into(),
            employee_id: "1".into(),
            employee_name: "Ahmet Yılmaz".into(),
            kind: leave_request::Kind::Annual,
            start_date: date(2024, 2, 15),
            end_date: date(2024, 2, 20),
            days: 5,
            status: leave_request::Status::Approved,
            reason: "Yıllık izin".into(),
        },
        LeaveRequest {
            id: "2".into(),
            employee_id: "2".into(),
            employee_name: "Ayşe Demir".into(),
            kind: leave_request::Kind::Sick,
            start_date: date(2024, 2, 12),
            end_date: date(2024, 2, 14),
            days: 3,
            status: leave_request::Status::Pending,
            reason: "Sağlık raporu".into(),
        },
        LeaveRequest {
            id: "3".into(),
            employee_id: "3".into(),
            employee_name: "Mehmet Kaya".into(),
            kind: leave_request::Kind::Personal,
            start_date: date(2024, 2, 18),
            end_date: date(2024, 2, 18),
            days: 1,
            status: leave_request::Status::Approved,
            reason: "Kişisel işler".into(),
        },
    ]
}

pub fn payroll_records() -> Vec<PayrollRecord> {
    vec![
        PayrollRecord {
            id: "1".into(),
            employee_id: "1".into(),
            employee_name: "Ahmet Yılmaz".into(),
            month: "2024-01".into(),
            gross_salary: 25_000,
            net_salary: 18_500,
            statutory_premium: 3_625,
            income_tax: 2_875,
            overtime_hours: 15,
            overtime_pay: 1_250,
        },
        PayrollRecord {
            id: "2".into(),
            employee_id: "2".into(),
            employee_name: "Ayşe Demir".into(),
            month: "2024-01".into(),
            gross_salary: 18_000,
            net_salary: 13_320,
            statutory_premium: 2_610,
            income_tax: 2_070,
            overtime_hours: 8,
            overtime_pay: 480,
        },
        PayrollRecord {
            id: "3".into(),
            employee_id: "3".into(),
            employee_name: "Mehmet Kaya".into(),
            month: "2024-01".into(),
            gross_salary: 16_000,
            net_salary: 11_840,
            statutory_premium: 2_320,
            income_tax: 1_840,
            overtime_hours: 5,
            overtime_pay: 300,
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: "1".into(),
            name: "Yazılım Geliştirme".into(),
            employee_count: 1,
            manager: "Ahmet Yılmaz".into(),
            budget: 500_000,
        },
        Department {
            id: "2".into(),
            name: "İnsan Kaynakları".into(),
            employee_count: 1,
            manager: "Ayşe Demir".into(),
            budget: 200_000,
        },
        Department {
            id: "3".into(),
            name: "Finans".into(),
            employee_count: 1,
            manager: "Mehmet Kaya".into(),
            budget: 300_000,
        },
    ]
}

pub fn bi_metrics() -> BiMetrics {
    BiMetrics {
        total_employees: 3,
        turnover_rate: 8.5,
        average_tenure: 2.8,
        total_payroll_cost: 59_000,
        average_salary: 19_667,
        active_leaves: 2,
        pending_leaves: 1,
        overtime_hours: 28,
    }
}
