use chrono::NaiveDate;
use entity::employee::{EmergencyContact, Employee, Status};
use search::{
    DateRange, EmployeeQuery, EmployeeSortField, QueryIssue, SalaryRange, SortOrder,
    search_employees,
};

fn init_tracing() {
    let _ = platform_obs::init_tracing(platform_obs::ObsConfig::default());
}

fn employee(
    id: &str,
    first_name: &str,
    last_name: &str,
    department: &str,
    position: &str,
    salary: i64,
    status: Status,
    start_date: (i32, u32, u32),
    address: &str,
) -> Employee {
    Employee {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        national_id: format!("0000000000{id}"),
        email: format!(
            "{}.{}@sirket.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: format!("+90 53{id} 000 000{id}"),
        department: department.into(),
        position: position.into(),
        start_date: NaiveDate::from_ymd_opt(start_date.0, start_date.1, start_date.2).unwrap(),
        salary,
        status,
        social_insurance_no: None,
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        address: address.into(),
        emergency_contact: EmergencyContact {
            name: "Kontak".into(),
            phone: "+90 500 000 0000".into(),
            relation: "Eş".into(),
        },
    }
}

fn staff() -> Vec<Employee> {
    init_tracing();
    vec![
        employee(
            "1",
            "Ahmet",
            "Yilmaz",
            "Yazılım Geliştirme",
            "Senior Developer",
            25_000,
            Status::Active,
            (2020, 3, 15),
            "Kadıköy, İstanbul",
        ),
        employee(
            "2",
            "Ayse",
            "Demir",
            "İnsan Kaynakları",
            "İK Uzmanı",
            18_000,
            Status::Active,
            (2019, 6, 1),
            "Beşiktaş, İstanbul",
        ),
        employee(
            "3",
            "Mehmet",
            "Kaya",
            "Finans",
            "Muhasebe Uzmanı",
            16_000,
            Status::Inactive,
            (2021, 1, 10),
            "Şişli, İstanbul",
        ),
    ]
}

fn salaries(records: &[Employee]) -> Vec<i64> {
    records.iter().map(|employee| employee.salary).collect()
}

#[test]
fn no_filters_returns_whole_collection_in_source_order() {
    let staff = staff();
    let result = search_employees(&staff, &EmployeeQuery::default());
    assert_eq!(result.total, staff.len());
    assert_eq!(result.records, staff);
    assert!(result.issues.is_empty());
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let staff = staff();
    let query = EmployeeQuery {
        page: Some(5),
        size: Some(10),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 3);
    assert!(result.records.is_empty());
    assert!(result.issues.is_empty());
}

#[test]
fn department_filter_is_exact_equality() {
    let staff = staff();
    let query = EmployeeQuery {
        department: Some("Finans".into()),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 1);
    assert!(
        result
            .records
            .iter()
            .all(|employee| employee.department == "Finans")
    );

    // A prefix is not a match.
    let partial = EmployeeQuery {
        department: Some("Fin".into()),
        ..Default::default()
    };
    assert_eq!(search_employees(&staff, &partial).total, 0);
}

#[test]
fn status_filter_matches_enum_value() {
    let staff = staff();
    let query = EmployeeQuery {
        status: Some(Status::Active),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 2);
}

#[test]
fn free_text_search_spans_fields_case_insensitively() {
    let staff = staff();
    let query = EmployeeQuery {
        search_term: Some("SENIOR".into()),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 1);
    assert_eq!(result.records[0].first_name, "Ahmet");

    let no_hit = EmployeeQuery {
        search_term: Some("robert".into()),
        ..Default::default()
    };
    assert_eq!(search_employees(&staff, &no_hit).total, 0);
}

#[test]
fn free_text_search_matches_turkish_addresses() {
    // All three addresses end in ", İstanbul"; the dotted capital must
    // still match a plain-ascii term.
    let staff = staff();
    let query = EmployeeQuery {
        search_term: Some("istanbul".into()),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 3);
}

#[test]
fn filters_compose_with_and() {
    let staff = staff();
    let query = EmployeeQuery {
        search_term: Some("istanbul".into()),
        status: Some(Status::Active),
        salary_range: Some(SalaryRange {
            min: 20_000,
            max: 90_000,
        }),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 1);
    assert_eq!(result.records[0].id, "1");
}

#[test]
fn salary_range_is_inclusive() {
    let staff = staff();
    let query = EmployeeQuery {
        salary_range: Some(SalaryRange {
            min: 17_000,
            max: 30_000,
        }),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 2);
    let mut matched = salaries(&result.records);
    matched.sort_unstable();
    assert_eq!(matched, vec![18_000, 25_000]);

    // Boundary values pass.
    let boundary = EmployeeQuery {
        salary_range: Some(SalaryRange {
            min: 16_000,
            max: 16_000,
        }),
        ..Default::default()
    };
    assert_eq!(search_employees(&staff, &boundary).total, 1);
}

#[test]
fn start_date_range_compares_calendar_dates() {
    let staff = staff();
    let query = EmployeeQuery {
        start_date_range: Some(DateRange {
            from: "2020-01-01".into(),
            to: "2020-12-31".into(),
        }),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 1);
    assert_eq!(result.records[0].id, "1");
    assert!(result.issues.is_empty());
}

#[test]
fn malformed_date_range_drops_the_filter_and_reports() {
    let staff = staff();
    let query = EmployeeQuery {
        start_date_range: Some(DateRange {
            from: "not-a-date".into(),
            to: "2024-01-01".into(),
        }),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 3);
    assert_eq!(
        result.issues,
        vec![QueryIssue::InvalidDateRange {
            value: "not-a-date".into()
        }]
    );
}

#[test]
fn city_filter_uses_trailing_address_segment() {
    let staff = staff();
    let istanbul = EmployeeQuery {
        city: Some("istanbul".into()),
        ..Default::default()
    };
    assert_eq!(search_employees(&staff, &istanbul).total, 3);

    // Districts live before the comma and are not part of the city key.
    let district = EmployeeQuery {
        city: Some("Kadıköy".into()),
        ..Default::default()
    };
    assert_eq!(search_employees(&staff, &district).total, 0);
}

#[test]
fn sort_by_salary_desc_pages_from_the_top() {
    let staff = staff();
    let query = EmployeeQuery {
        sort_by: Some(EmployeeSortField::Salary),
        sort_order: SortOrder::Desc,
        page: Some(1),
        size: Some(2),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 3);
    assert_eq!(salaries(&result.records), vec![25_000, 18_000]);
}

#[test]
fn sorting_is_idempotent_and_desc_reverses_asc() {
    let staff = staff();
    let asc = EmployeeQuery {
        sort_by: Some(EmployeeSortField::Salary),
        size: Some(100),
        ..Default::default()
    };
    let first = search_employees(&staff, &asc);
    let again = search_employees(&first.records, &asc);
    assert_eq!(first.records, again.records);

    let desc = EmployeeQuery {
        sort_order: SortOrder::Desc,
        ..asc
    };
    let reversed = search_employees(&staff, &desc);
    let mut expected = first.records.clone();
    expected.reverse();
    assert_eq!(reversed.records, expected);
}

#[test]
fn sort_ties_preserve_source_order() {
    let mut staff = staff();
    // Give everyone the same department so the sort key is a three-way tie.
    for member in &mut staff {
        member.department = "Ortak".into();
    }
    let query = EmployeeQuery {
        sort_by: Some(EmployeeSortField::Department),
        size: Some(100),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.records, staff);
}

#[test]
fn full_name_sort_uses_first_and_last_name() {
    let staff = staff();
    let query = EmployeeQuery {
        sort_by: Some(EmployeeSortField::FullName),
        size: Some(100),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    let names: Vec<String> = result
        .records
        .iter()
        .map(|employee| employee.full_name())
        .collect();
    assert_eq!(names, vec!["Ahmet Yilmaz", "Ayse Demir", "Mehmet Kaya"]);
}

#[test]
fn pages_partition_the_sorted_matches() {
    let staff = staff();
    let all = EmployeeQuery {
        sort_by: Some(EmployeeSortField::Salary),
        size: Some(100),
        ..Default::default()
    };
    let full = search_employees(&staff, &all).records;

    let size = 2;
    let mut collected = Vec::new();
    let mut page = 1;
    loop {
        let query = EmployeeQuery {
            sort_by: Some(EmployeeSortField::Salary),
            page: Some(page),
            size: Some(size),
            ..Default::default()
        };
        let result = search_employees(&staff, &query);
        if result.records.is_empty() {
            break;
        }
        collected.extend(result.records);
        page += 1;
    }
    assert_eq!(collected, full);
}

#[test]
fn page_below_one_clamps_and_reports() {
    let staff = staff();
    let query = EmployeeQuery {
        page: Some(0),
        size: Some(2),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.records.len(), 2);
    assert_eq!(
        result.issues,
        vec![QueryIssue::InvalidPageRequest { page: 0, size: 2 }]
    );
}

#[test]
fn non_positive_size_returns_empty_page() {
    let staff = staff();
    let query = EmployeeQuery {
        size: Some(0),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert!(result.records.is_empty());
    assert_eq!(result.total, 3);
    assert_eq!(
        result.issues,
        vec![QueryIssue::InvalidPageRequest { page: 1, size: 0 }]
    );
}

#[test]
fn facet_counts_sum_to_collection_size() {
    let staff = staff();
    let result = search_employees(&staff, &EmployeeQuery::default());
    let facets = &result.aggregations;
    assert_eq!(facets.departments.values().sum::<u64>(), 3);
    assert_eq!(facets.positions.values().sum::<u64>(), 3);
    assert_eq!(facets.statuses.values().sum::<u64>(), 3);
    assert_eq!(facets.cities.values().sum::<u64>(), 3);
    assert_eq!(facets.salary_ranges.total(), 3);

    assert_eq!(facets.statuses.get("active"), Some(&2));
    assert_eq!(facets.cities.get("İstanbul"), Some(&3));
    assert_eq!(facets.salary_ranges.from_15000, 2);
    assert_eq!(facets.salary_ranges.from_25000, 1);
}

#[test]
fn facets_ignore_the_active_filter_set() {
    let staff = staff();
    let query = EmployeeQuery {
        department: Some("Finans".into()),
        ..Default::default()
    };
    let result = search_employees(&staff, &query);
    assert_eq!(result.total, 1);
    // Dropdown counts keep full-population numbers.
    assert_eq!(result.aggregations.departments.len(), 3);
    assert_eq!(result.aggregations.departments.values().sum::<u64>(), 3);
}

#[test]
fn result_serializes_with_dashboard_casing() {
    let staff = staff();
    let result = search_employees(&staff, &EmployeeQuery::default());
    let value = serde_json::to_value(&result).unwrap();
    assert!(value["records"].is_array());
    assert_eq!(value["total"], serde_json::json!(3));
    let bands = &value["aggregations"]["salaryRanges"];
    assert_eq!(bands["15000-25000"], serde_json::json!(2));
    assert_eq!(bands["35000+"], serde_json::json!(0));
    assert_eq!(value["records"][0]["firstName"], serde_json::json!("Ahmet"));
}
