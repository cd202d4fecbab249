//! Modelo de User
//!
//! Colaboradores y administradores. `senha` llega desde la capa upstream y
//! nunca debe salir en respuestas de reporte ni en logs.

use serde::{Deserialize, Serialize};

/// Perfil del usuario - mapea al campo `perfil` upstream
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    CustomAdmin,
    Motorista,
    Ajudante,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub senha: String,
    pub perfil: UserRole,
    #[serde(default)]
    pub ativo: bool,
    #[serde(default)]
    pub permissoes: Vec<String>,
}
