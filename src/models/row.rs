//! Flattened per-person rows
//!
//! A `FlatRow` is the denormalized form of one `RawRecord`: the selected
//! members of every sub-document side by side, plus the derived columns filled
//! in by the derivation step. Every column except the identifier is optional.

use crate::models::field::Field;
use crate::models::raw::RecordId;
use crate::models::types::Region;

/// One denormalized row per person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    /// Record identifier (never published)
    pub id: RecordId,

    pub raca_ds: Option<String>,
    pub data_nascimento: Option<String>,
    pub sexo_ds: Option<String>,
    pub estado_civil_ds: Option<String>,
    pub ident_genero_ds: Option<String>,
    pub orientacao_sexual_ds: Option<String>,
    pub nome_social: Option<String>,
    pub rg_uf_ds: Option<String>,
    pub municipio: Option<String>,

    pub data_formacao: Option<String>,
    pub pais_formacao_ds: Option<String>,
    pub municipio_formacao: Option<String>,
    pub uf_crm_ds: Option<String>,

    pub aa_tipo_ds: Option<String>,
    pub rm_rec_cnrm_ds: Option<String>,
    pub rm_1_esp_medica_ds: Option<String>,
    pub rm_2_esp_medica_ds: Option<String>,
    pub tit_esp_amb_ds: Option<String>,
    pub amb_1_esp_medica_ds: Option<String>,
    pub amb_2_esp_medica_ds: Option<String>,
    pub curso_nome: Option<String>,
    pub vaga_uf: Option<String>,
    pub vaga_municipio: Option<String>,

    pub apropriacao_redes: Option<String>,
    pub apropriacao_coordenacao: Option<String>,
    pub apropriacao_gestao: Option<String>,
    pub apropriacao_evidencias: Option<String>,
    pub experiencia_digital: Option<String>,

    /// Whole years since birth at the evaluation date
    pub idade: Option<i32>,
    /// Whole years since graduation at the evaluation date
    pub tempo_graduado: Option<i32>,
    /// "Sim" or "Não"
    pub tem_nome_social: Option<String>,
    pub estado_graduacao: Option<String>,
    pub curso_nome_limpo: Option<String>,
    pub regiao_nascimento: Option<Region>,
    pub regiao_graduacao: Option<Region>,
    pub regiao_crm: Option<Region>,
    pub regiao_vaga: Option<Region>,
}

impl FlatRow {
    /// Create a row with every column empty
    #[must_use]
    pub const fn new(id: RecordId) -> Self {
        Self {
            id,
            raca_ds: None,
            data_nascimento: None,
            sexo_ds: None,
            estado_civil_ds: None,
            ident_genero_ds: None,
            orientacao_sexual_ds: None,
            nome_social: None,
            rg_uf_ds: None,
            municipio: None,
            data_formacao: None,
            pais_formacao_ds: None,
            municipio_formacao: None,
            uf_crm_ds: None,
            aa_tipo_ds: None,
            rm_rec_cnrm_ds: None,
            rm_1_esp_medica_ds: None,
            rm_2_esp_medica_ds: None,
            tit_esp_amb_ds: None,
            amb_1_esp_medica_ds: None,
            amb_2_esp_medica_ds: None,
            curso_nome: None,
            vaga_uf: None,
            vaga_municipio: None,
            apropriacao_redes: None,
            apropriacao_coordenacao: None,
            apropriacao_gestao: None,
            apropriacao_evidencias: None,
            experiencia_digital: None,
            idade: None,
            tempo_graduado: None,
            tem_nome_social: None,
            estado_graduacao: None,
            curso_nome_limpo: None,
            regiao_nascimento: None,
            regiao_graduacao: None,
            regiao_crm: None,
            regiao_vaga: None,
        }
    }

    /// Text value of a column; `None` for null values and numeric columns
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::RacaDs => &self.raca_ds,
            Field::DataNascimento => &self.data_nascimento,
            Field::SexoDs => &self.sexo_ds,
            Field::EstadoCivilDs => &self.estado_civil_ds,
            Field::IdentGeneroDs => &self.ident_genero_ds,
            Field::OrientacaoSexualDs => &self.orientacao_sexual_ds,
            Field::NomeSocial => &self.nome_social,
            Field::RgUfDs => &self.rg_uf_ds,
            Field::Municipio => &self.municipio,
            Field::DataFormacao => &self.data_formacao,
            Field::PaisFormacaoDs => &self.pais_formacao_ds,
            Field::MunicipioFormacao => &self.municipio_formacao,
            Field::UfCrmDs => &self.uf_crm_ds,
            Field::AaTipoDs => &self.aa_tipo_ds,
            Field::RmRecCnrmDs => &self.rm_rec_cnrm_ds,
            Field::Rm1EspMedicaDs => &self.rm_1_esp_medica_ds,
            Field::Rm2EspMedicaDs => &self.rm_2_esp_medica_ds,
            Field::TitEspAmbDs => &self.tit_esp_amb_ds,
            Field::Amb1EspMedicaDs => &self.amb_1_esp_medica_ds,
            Field::Amb2EspMedicaDs => &self.amb_2_esp_medica_ds,
            Field::CursoNome => &self.curso_nome,
            Field::VagaUf => &self.vaga_uf,
            Field::VagaMunicipio => &self.vaga_municipio,
            Field::ApropriacaoRedes => &self.apropriacao_redes,
            Field::ApropriacaoCoordenacao => &self.apropriacao_coordenacao,
            Field::ApropriacaoGestao => &self.apropriacao_gestao,
            Field::ApropriacaoEvidencias => &self.apropriacao_evidencias,
            Field::ExperienciaDigital => &self.experiencia_digital,
            Field::TemNomeSocial => &self.tem_nome_social,
            Field::EstadoGraduacao => &self.estado_graduacao,
            Field::CursoNomeLimpo => &self.curso_nome_limpo,
            Field::RegiaoNascimento
            | Field::RegiaoGraduacao
            | Field::RegiaoCrm
            | Field::RegiaoVaga => return self.region(field).map(Region::name),
            Field::Idade | Field::TempoGraduado => return None,
        };
        value.as_deref()
    }

    /// Numeric value of a column; `None` for null values and text columns
    #[must_use]
    pub const fn number(&self, field: Field) -> Option<i32> {
        match field {
            Field::Idade => self.idade,
            Field::TempoGraduado => self.tempo_graduado,
            _ => None,
        }
    }

    /// Region value of a column; `None` for null values and non-region columns
    #[must_use]
    pub const fn region(&self, field: Field) -> Option<Region> {
        match field {
            Field::RegiaoNascimento => self.regiao_nascimento,
            Field::RegiaoGraduacao => self.regiao_graduacao,
            Field::RegiaoCrm => self.regiao_crm,
            Field::RegiaoVaga => self.regiao_vaga,
            _ => None,
        }
    }

    /// Value of any column rendered as a category label
    #[must_use]
    pub fn label(&self, field: Field) -> Option<String> {
        if field.is_numeric() {
            self.number(field).map(|n| n.to_string())
        } else {
            self.text(field).map(str::to_string)
        }
    }
}
