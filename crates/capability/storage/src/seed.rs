//! 演示种子数据
//!
//! 初始化空存储时写入的示例记录：三条处于不同生命周期阶段的
//! 工单，七名一线人员与六名专家。

use chrono::{Duration, Utc};
use domain::{
    AssigneeRef, Coordinates, Department, HistoryEntry, Issue, IssueStatus, Personnel,
    PersonnelStatus, Priority,
    personnel::{TIER_GENERAL, TIER_SPECIALIST},
};

/// 演示工单集合（最近在前）。
pub fn seed_issues() -> Vec<Issue> {
    let now = Utc::now();
    vec![
        Issue {
            id: "ISS-1001".to_string(),
            title: "Deep Pothole on Main St".to_string(),
            issue_type: "Pothole".to_string(),
            priority: Priority::Critical,
            status: IssueStatus::Assigned,
            department: Department::PublicWorks,
            description: "A large pothole causing traffic slowdowns near the market entrance."
                .to_string(),
            location: "Main Market Road, Sector 4".to_string(),
            coordinates: Some(Coordinates {
                lat: 40.7128,
                lng: -74.0060,
            }),
            attachments: Vec::new(),
            assigned_to: Some(AssigneeRef {
                id: "P-002".to_string(),
                name: "Jane Smith".to_string(),
            }),
            last_assigned_to: None,
            resolution_proof: None,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::hours(11),
            history: vec![
                HistoryEntry {
                    action: "Reported".to_string(),
                    by: "Citizen".to_string(),
                    timestamp: now - Duration::days(2),
                },
                HistoryEntry {
                    action: "Verified".to_string(),
                    by: "Officer J.".to_string(),
                    timestamp: now - Duration::hours(24),
                },
                HistoryEntry {
                    action: "Assigned".to_string(),
                    by: "System".to_string(),
                    timestamp: now - Duration::hours(11),
                },
            ],
        },
        Issue {
            id: "ISS-1002".to_string(),
            title: "Garbage not collected".to_string(),
            issue_type: "Garbage Dump".to_string(),
            priority: Priority::Medium,
            status: IssueStatus::Reported,
            department: Department::Sanitation,
            description: "Garbage truck missed this street for 3 days.".to_string(),
            location: "Residential Block B".to_string(),
            coordinates: Some(Coordinates {
                lat: 40.7140,
                lng: -74.0050,
            }),
            attachments: Vec::new(),
            assigned_to: None,
            last_assigned_to: None,
            resolution_proof: None,
            created_at: now - Duration::hours(1),
            updated_at: now - Duration::hours(1),
            history: vec![HistoryEntry {
                action: "Reported".to_string(),
                by: "Citizen".to_string(),
                timestamp: now - Duration::hours(1),
            }],
        },
        Issue {
            id: "ISS-1003".to_string(),
            title: "Broken Street Light".to_string(),
            issue_type: "Street Light Failure".to_string(),
            priority: Priority::Low,
            status: IssueStatus::Resolved,
            department: Department::Power,
            description: "Light pole #45 is flickering.".to_string(),
            location: "Park Avenue".to_string(),
            coordinates: Some(Coordinates {
                lat: 40.7135,
                lng: -74.0075,
            }),
            attachments: Vec::new(),
            assigned_to: None,
            last_assigned_to: None,
            resolution_proof: None,
            created_at: now - Duration::days(5),
            updated_at: now - Duration::days(1),
            history: vec![
                HistoryEntry {
                    action: "Reported".to_string(),
                    by: "Citizen".to_string(),
                    timestamp: now - Duration::days(5),
                },
                HistoryEntry {
                    action: "Resolved".to_string(),
                    by: "Tech Team".to_string(),
                    timestamp: now - Duration::days(1),
                },
            ],
        },
    ]
}

/// 演示人员集合（Tier 1 通用人员 + Tier 2 专家）。
pub fn seed_personnel() -> Vec<Personnel> {
    let tier1: [(&str, &str, &str, Department); 7] = [
        ("P-001", "John Doe", "Driver", Department::Sanitation),
        ("P-002", "Jane Smith", "General Maintenance", Department::PublicWorks),
        ("P-003", "Mike Ross", "Cleaner", Department::Sanitation),
        ("P-004", "Rachel Zane", "Field Inspector", Department::Health),
        ("P-005", "Carlos Rodriguez", "Road Crew", Department::PublicWorks),
        ("P-006", "Lisa Chen", "Pipe Fitter", Department::WaterSupply),
        ("P-007", "Omar Little", "Security Guard", Department::Power),
    ];
    let tier2: [(&str, &str, &str, Department); 6] = [
        ("P-101", "Dr. Gregory House", "Lead Epidemiologist", Department::Health),
        ("P-102", "Tony Stark", "Structural Engineer", Department::PublicWorks),
        ("P-103", "Walter White", "Chemical Safety Expert", Department::Sanitation),
        ("P-104", "Emmet Brown", "Senior Electrician", Department::Power),
        ("P-105", "Elena Fisher", "Hydraulic Engineer", Department::WaterSupply),
        ("P-106", "Bruce Banner", "Radiation Analyst", Department::Power),
    ];

    tier1
        .into_iter()
        .map(|(id, name, role, department)| (id, name, role, department, TIER_GENERAL))
        .chain(
            tier2
                .into_iter()
                .map(|(id, name, role, department)| (id, name, role, department, TIER_SPECIALIST)),
        )
        .map(|(id, name, role, department, tier)| Personnel {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            tier,
            status: PersonnelStatus::Available,
            department,
        })
        .collect()
}
