pub const ENTRIES: &[(&str, &str)] = &[
    ("app.title", "Explorador de Países"),
    ("app.subtitle", "Descubre {count} países de todo el mundo"),
    ("language.name", "Español"),
    ("search.placeholder", "Buscar países..."),
    ("search.clearHint", "Esc para borrar"),
    ("search.searching", "Buscando..."),
    ("search.noResults", "No se encontraron resultados para \"{query}\""),
    ("search.oneResult", "1 resultado encontrado para \"{query}\""),
    ("search.results", "{count} resultados encontrados para \"{query}\""),
    ("list.loading", "Cargando países de todo el mundo..."),
    ("list.refreshing", "Actualizando..."),
    ("list.emptyTitle", "No se encontraron países"),
    ("list.emptyMessage", "Intenta actualizar la lista o revisa tu conexión"),
    ("loadMore", "Cargar más"),
    ("loading", "Cargando..."),
    ("noResults", "No hay más resultados"),
    ("pagination.progress", "{loaded} de {total} cargados"),
    ("pagination.end", "Los {total} países están cargados"),
    ("country.officialName", "Nombre oficial"),
    ("country.capital", "Capital"),
    ("country.region", "Región"),
    ("country.population", "Población"),
    ("country.code", "Código"),
    ("country.flag", "Bandera"),
    ("country.notAvailable", "N/D"),
    ("detail.title", "Detalle del país"),
    ("detail.loading", "Cargando país {code}..."),
    ("error.title", "Error al cargar los países"),
    ("error.detailTitle", "Error al cargar el país"),
    ("error.retry", "Pulsa r para reintentar"),
    ("footer.list", "↑↓ Mover │ Enter Detalles │ Tab Más │ Ctrl+R Recargar │ Ctrl+L Idioma │ Ctrl+Q Salir"),
    ("footer.detail", "Esc Volver │ r Reintentar │ Ctrl+L Idioma │ Ctrl+Q Salir"),
    ("cli.page", "Página {page} de {pages} · {total} países"),
];
