use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest};
use crate::repositories::UserRepository;
use crate::services::JwtService;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: UserRepository,
    jwt_service: JwtService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_service: JwtService::new(config),
        }
    }

    /// Registro con login automático: devuelve el token junto al usuario
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(request.username, request.email, password_hash, request.full_name)
            .await?;

        log::info!("Usuario registrado: {} ({})", user.username, user.id);

        let token = self.jwt_service.generate_access_token(&user)?;

        Ok(ApiResponse::success_with_message(
            AuthResponse {
                token,
                user: user.into(),
            },
            "Welcome to RentEasy!".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        // Mismo error para usuario inexistente y contraseña incorrecta
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let password_ok = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !password_ok {
            return Err(AppError::Unauthorized("Invalid username or password".to_string()));
        }

        let token = self.jwt_service.generate_access_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}
