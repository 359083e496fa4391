use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::candidate::CandidateRow;
use crate::models::recommendation::RecommendationRow;
use crate::models::report::DescriptiveResultRow;
use crate::models::resume::{NewResume, ResumeRow};
use crate::store::{FetchError, RecruitingStore};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established ({max_connections} max connections)");
    Ok(pool)
}

// Spanish column names are aliased to the English field names of `CandidateRow`.
const CANDIDATE_SELECT: &str = r#"
    SELECT p.postulante_id AS id,
           p.cv_id AS resume_id,
           p.nombre_completo AS full_name,
           p.email,
           p.telefono AS phone,
           p.habilidades AS skills,
           p.experiencia::jsonb AS experience,
           p.educacion::jsonb AS education,
           c.fecha_carga::timestamptz AS uploaded_at,
           pr.probabilidad_exito::float8 AS success_probability
    FROM datos_postulantes p
    LEFT JOIN curriculums c ON c.cv_id = p.cv_id
    LEFT JOIN predicciones pr ON pr.postulante_id = p.postulante_id
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecruitingStore for PgStore {
    async fn count_candidates(&self) -> Result<i64, FetchError> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM datos_postulantes")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn count_resumes(&self) -> Result<i64, FetchError> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM curriculums")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn success_probabilities(&self) -> Result<Vec<f64>, FetchError> {
        Ok(sqlx::query_scalar(
            "SELECT probabilidad_exito::float8 FROM predicciones WHERE probabilidad_exito IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn skill_lists(&self) -> Result<Vec<Vec<String>>, FetchError> {
        Ok(sqlx::query_scalar(
            "SELECT habilidades FROM datos_postulantes WHERE habilidades IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn experience_records(&self) -> Result<Vec<Option<serde_json::Value>>, FetchError> {
        Ok(
            sqlx::query_scalar("SELECT experiencia::jsonb FROM datos_postulantes")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn candidates(&self, limit: Option<i64>) -> Result<Vec<CandidateRow>, FetchError> {
        // LIMIT NULL is LIMIT ALL in Postgres.
        let sql = format!("{CANDIDATE_SELECT} ORDER BY p.postulante_id DESC LIMIT $1");
        let rows = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        debug!("Fetched {} candidates", rows.len());
        Ok(rows)
    }

    async fn candidate(&self, id: i32) -> Result<Option<CandidateRow>, FetchError> {
        let sql = format!("{CANDIDATE_SELECT} WHERE p.postulante_id = $1");
        Ok(sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn recommendations(&self) -> Result<Vec<RecommendationRow>, FetchError> {
        Ok(sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT recomendacion_id AS id,
                   mensaje AS message,
                   descripcion AS description,
                   tipo AS kind,
                   fecha_creacion::timestamptz AS created_at
            FROM recomendaciones
            ORDER BY fecha_creacion DESC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn descriptive_results(&self, limit: i64) -> Result<Vec<DescriptiveResultRow>, FetchError> {
        Ok(sqlx::query_as::<_, DescriptiveResultRow>(
            r#"
            SELECT analisis_id AS id,
                   cv_procesados AS cvs_processed,
                   experiencia_promedio::jsonb AS average_experience,
                   fecha_analisis::timestamptz AS analysed_at,
                   habilidades_top AS top_skills
            FROM resultados_descriptivos
            ORDER BY fecha_analisis DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, FetchError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO curriculums
                (uploader_id, nombre_archivo, fecha_carga, formato, tamano_bytes, contenido_texto)
            VALUES ($1, $2, now(), $3, $4, $5)
            RETURNING cv_id AS id,
                      uploader_id,
                      nombre_archivo AS file_name,
                      fecha_carga::timestamptz AS uploaded_at,
                      formato AS format,
                      tamano_bytes::int8 AS size_bytes,
                      contenido_texto AS text_content
            "#,
        )
        .bind(resume.uploader_id)
        .bind(&resume.file_name)
        .bind(&resume.format)
        .bind(resume.size_bytes)
        .bind(&resume.text_content)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted resume {} ({})", row.id, row.file_name);
        Ok(row)
    }
}
