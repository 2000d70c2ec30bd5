//! Named columns of a flattened row

use std::fmt;
use std::str::FromStr;

/// Every named column a `FlatRow` carries, besides its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    // info_pessoais
    RacaDs,
    DataNascimento,
    SexoDs,
    EstadoCivilDs,
    IdentGeneroDs,
    OrientacaoSexualDs,
    NomeSocial,
    RgUfDs,
    Municipio,
    // formacao_academica
    DataFormacao,
    PaisFormacaoDs,
    MunicipioFormacao,
    UfCrmDs,
    // listas_selecao
    AaTipoDs,
    RmRecCnrmDs,
    Rm1EspMedicaDs,
    Rm2EspMedicaDs,
    TitEspAmbDs,
    Amb1EspMedicaDs,
    Amb2EspMedicaDs,
    CursoNome,
    VagaUf,
    VagaMunicipio,
    // top-level scalars
    ApropriacaoRedes,
    ApropriacaoCoordenacao,
    ApropriacaoGestao,
    ApropriacaoEvidencias,
    ExperienciaDigital,
    // derived
    Idade,
    TempoGraduado,
    TemNomeSocial,
    EstadoGraduacao,
    CursoNomeLimpo,
    RegiaoNascimento,
    RegiaoGraduacao,
    RegiaoCrm,
    RegiaoVaga,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Self; 37] = [
        Self::RacaDs,
        Self::DataNascimento,
        Self::SexoDs,
        Self::EstadoCivilDs,
        Self::IdentGeneroDs,
        Self::OrientacaoSexualDs,
        Self::NomeSocial,
        Self::RgUfDs,
        Self::Municipio,
        Self::DataFormacao,
        Self::PaisFormacaoDs,
        Self::MunicipioFormacao,
        Self::UfCrmDs,
        Self::AaTipoDs,
        Self::RmRecCnrmDs,
        Self::Rm1EspMedicaDs,
        Self::Rm2EspMedicaDs,
        Self::TitEspAmbDs,
        Self::Amb1EspMedicaDs,
        Self::Amb2EspMedicaDs,
        Self::CursoNome,
        Self::VagaUf,
        Self::VagaMunicipio,
        Self::ApropriacaoRedes,
        Self::ApropriacaoCoordenacao,
        Self::ApropriacaoGestao,
        Self::ApropriacaoEvidencias,
        Self::ExperienciaDigital,
        Self::Idade,
        Self::TempoGraduado,
        Self::TemNomeSocial,
        Self::EstadoGraduacao,
        Self::CursoNomeLimpo,
        Self::RegiaoNascimento,
        Self::RegiaoGraduacao,
        Self::RegiaoCrm,
        Self::RegiaoVaga,
    ];

    /// Column name as written in the public dataset
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RacaDs => "raca_ds",
            Self::DataNascimento => "data_nascimento",
            Self::SexoDs => "sexo_ds",
            Self::EstadoCivilDs => "estado_civil_ds",
            Self::IdentGeneroDs => "ident_genero_ds",
            Self::OrientacaoSexualDs => "orientacao_sexual_ds",
            Self::NomeSocial => "nome_social",
            Self::RgUfDs => "rg_uf_ds",
            Self::Municipio => "municipio",
            Self::DataFormacao => "data_formacao",
            Self::PaisFormacaoDs => "pais_formacao_ds",
            Self::MunicipioFormacao => "municipio_formacao",
            Self::UfCrmDs => "uf_crm_ds",
            Self::AaTipoDs => "aa_tipo_ds",
            Self::RmRecCnrmDs => "rm_rec_cnrm_ds",
            Self::Rm1EspMedicaDs => "rm_1_esp_medica_ds",
            Self::Rm2EspMedicaDs => "rm_2_esp_medica_ds",
            Self::TitEspAmbDs => "tit_esp_amb_ds",
            Self::Amb1EspMedicaDs => "amb_1_esp_medica_ds",
            Self::Amb2EspMedicaDs => "amb_2_esp_medica_ds",
            Self::CursoNome => "curso_nome",
            Self::VagaUf => "vaga_uf",
            Self::VagaMunicipio => "vaga_municipio",
            Self::ApropriacaoRedes => "apropriacao_redes",
            Self::ApropriacaoCoordenacao => "apropriacao_coordenacao",
            Self::ApropriacaoGestao => "apropriacao_gestao",
            Self::ApropriacaoEvidencias => "apropriacao_evidencias",
            Self::ExperienciaDigital => "experiencia_digital",
            Self::Idade => "idade",
            Self::TempoGraduado => "tempo_graduado",
            Self::TemNomeSocial => "tem_nome_social",
            Self::EstadoGraduacao => "estado_graduacao",
            Self::CursoNomeLimpo => "curso_nome_limpo",
            Self::RegiaoNascimento => "regiao_nascimento",
            Self::RegiaoGraduacao => "regiao_graduacao",
            Self::RegiaoCrm => "regiao_crm",
            Self::RegiaoVaga => "regiao_vaga",
        }
    }

    /// Whether the column holds whole numbers rather than text
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Idade | Self::TempoGraduado)
    }

    /// Whether the column may identify a person and must never be published
    #[must_use]
    pub const fn is_identifying(self) -> bool {
        matches!(
            self,
            Self::DataNascimento | Self::DataFormacao | Self::NomeSocial | Self::Municipio
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("sexo".parse::<Field>().is_err());
    }

    #[test]
    fn test_only_derived_counters_are_numeric() {
        let numeric: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_numeric()).collect();
        assert_eq!(numeric, vec![Field::Idade, Field::TempoGraduado]);
    }
}
