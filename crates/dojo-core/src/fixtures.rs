//! Literal fixture values.
//!
//! Each function builds a fresh value on every call; nothing here is cached
//! or mutated.

use crate::entities::{BillingPlan, Class, Organization, Student, Technique};
use crate::responses::{HealthResponse, ListResponse};

/// Timestamp reported by the health route. Fixed so responses are reproducible.
pub const HEALTH_TIMESTAMP: &str = "2025-07-14T12:00:00.000Z";

/// Message reported by the health route.
pub const HEALTH_MESSAGE: &str = "Dashboard Server Running!";

#[must_use]
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "healthy".into(),
        timestamp: HEALTH_TIMESTAMP.into(),
        message: HEALTH_MESSAGE.into(),
    }
}

#[must_use]
pub fn students() -> ListResponse<Student> {
    ListResponse::ok(vec![
        Student {
            id: "0b997817-3ce9-426b-9230-ab2a71e5b53a".into(),
            name: "João Santos".into(),
            email: "joao.santos@email.com".into(),
            category: "ADULT".into(),
            belt: "Faixa Branca".into(),
            progress: 85,
            attendance: 92,
            status: "active".into(),
            enrollment_date: "2024-01-15".into(),
        },
        Student {
            id: "1c886db7-44e1-4a2b-87c9-b3f4c8e9f0d1".into(),
            name: "Maria Silva".into(),
            email: "maria.silva@email.com".into(),
            category: "FEMALE".into(),
            belt: "Faixa Amarela".into(),
            progress: 76,
            attendance: 88,
            status: "active".into(),
            enrollment_date: "2023-11-20".into(),
        },
    ])
}

#[must_use]
pub fn organizations() -> ListResponse<Organization> {
    ListResponse::ok(vec![Organization {
        id: "452c0b35-1822-4890-851e-922356c812fb".into(),
        name: "Academia Krav Maga".into(),
        slug: "academia-krav-maga".into(),
        city: "São Paulo".into(),
        state: "SP".into(),
        active_students: 2,
        is_active: true,
    }])
}

#[must_use]
pub fn techniques() -> ListResponse<Technique> {
    ListResponse::ok(vec![Technique {
        id: "7f3e2a91-6b4d-4c8e-a1f5-3d9b8c7e6a20".into(),
        name: "Defesa 360".into(),
        category: "DEFENSE".into(),
        difficulty: 1,
        belt_level: "Faixa Branca".into(),
        description: "Defesa contra ataques circulares externos".into(),
    }])
}

#[must_use]
pub fn classes() -> ListResponse<Class> {
    ListResponse::ok(vec![
        Class {
            id: 1,
            name: "Krav Maga Iniciante - Manhã".into(),
            instructor: "Professor João Silva".into(),
            schedule: "Segunda, Quarta e Sexta - 08:00 às 09:00".into(),
            level: "Iniciante".into(),
            max_students: 20,
            current_students: 15,
            room: "Sala 1".into(),
            status: "active".into(),
            description: "Turma para iniciantes focada em fundamentos básicos".into(),
            start_date: "2025-01-15".into(),
            end_date: "2025-06-15".into(),
        },
        Class {
            id: 2,
            name: "Krav Maga Avançado - Noite".into(),
            instructor: "Professor Maria Santos".into(),
            schedule: "Terça e Quinta - 19:00 às 20:30".into(),
            level: "Avançado".into(),
            max_students: 15,
            current_students: 12,
            room: "Sala 2".into(),
            status: "active".into(),
            description: "Turma avançada com técnicas de combate e defesa pessoal".into(),
            start_date: "2025-02-01".into(),
            end_date: "2025-07-01".into(),
        },
    ])
}

#[must_use]
pub fn billing_plans() -> ListResponse<BillingPlan> {
    let plan = |id, name: &str, price, description: &str| BillingPlan {
        id,
        name: name.into(),
        price,
        description: description.into(),
        active: true,
    };
    ListResponse::ok(vec![
        plan(1, "Plano Mensal", 150.0, "Acesso mensal às aulas"),
        plan(2, "Plano Trimestral", 420.0, "Acesso trimestral com desconto"),
        plan(3, "Plano Anual", 1500.0, "Acesso anual com maior desconto"),
    ])
}
