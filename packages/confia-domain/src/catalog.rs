//! Static city and service catalogs backing the structured search form.

pub const BRAZILIAN_CITIES: &[&str] = &[
	"São Paulo",
	"Rio de Janeiro",
	"Brasília",
	"Salvador",
	"Fortaleza",
	"Belo Horizonte",
	"Manaus",
	"Curitiba",
	"Recife",
	"Porto Alegre",
	"Belém",
	"Goiânia",
	"Guarulhos",
	"Campinas",
	"São Luís",
	"São Gonçalo",
	"Maceió",
	"Duque de Caxias",
	"Natal",
	"Santo André",
	"Osasco",
	"Niterói",
	"Ribeirão Preto",
	"Sorocaba",
	"Santos",
	"Uberlândia",
	"Contagem",
	"Jaboatão dos Guararapes",
	"Feira de Santana",
	"Vila Velha",
	"Caxias do Sul",
	"Joinville",
	"Campina Grande",
	"Aracaju",
	"Aparecida de Goiânia",
	"Paulista",
	"Cascavel",
	"Anápolis",
];

pub const AVAILABLE_SERVICES: &[&str] = &[
	"Limpeza",
	"Encanamento",
	"Eletricidade",
	"Pintura",
	"Carpintaria",
	"Alvenaria",
	"Jardinagem",
	"Hidráulica",
	"Ar-condicionado",
	"Serralheria",
	"Vidraçaria",
	"Marmoaria",
	"Impermeabilização",
	"Reboco",
	"Azulejaria",
];

/// Case-insensitive substring completion over the city list; an empty input
/// yields the head of the catalog.
pub fn suggest_cities(input: &str, limit: usize) -> Vec<&'static str> {
	let normalized = input.trim().to_lowercase();

	BRAZILIAN_CITIES
		.iter()
		.filter(|city| city.to_lowercase().contains(&normalized))
		.take(limit)
		.copied()
		.collect()
}

pub fn services() -> Vec<&'static str> {
	AVAILABLE_SERVICES.to_vec()
}
