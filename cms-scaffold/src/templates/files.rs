//! Template file contents

/// Route table: five public CRUD routes
pub const ROUTES_TEMPLATE: &str = r"module.exports = {
  routes: [
    {
      method: 'GET',
      path: '{{route_path}}',
      handler: '{{name}}.find',
      config: {
        auth: false,
      },
    },
    {
      method: 'GET',
      path: '{{route_path}}/:id',
      handler: '{{name}}.findOne',
      config: {
        auth: false,
      },
    },
    {
      method: 'POST',
      path: '{{route_path}}',
      handler: '{{name}}.create',
      config: {
        auth: false,
      },
    },
    {
      method: 'PUT',
      path: '{{route_path}}/:id',
      handler: '{{name}}.update',
      config: {
        auth: false,
      },
    },
    {
      method: 'DELETE',
      path: '{{route_path}}/:id',
      handler: '{{name}}.delete',
      config: {
        auth: false,
      },
    },
  ],
};
";

/// Controller: five handlers passing through to the entity service
pub const CONTROLLER_TEMPLATE: &str = r"module.exports = {
  async find(ctx) {
    return await strapi.entityService.findMany('{{service_uid}}', ctx.query);
  },
  async findOne(ctx) {
    return await strapi.entityService.findOne('{{service_uid}}', ctx.params.id, ctx.query);
  },
  async create(ctx) {
    return await strapi.entityService.create('{{service_uid}}', { data: ctx.request.body });
  },
  async update(ctx) {
    return await strapi.entityService.update('{{service_uid}}', ctx.params.id, { data: ctx.request.body });
  },
  async delete(ctx) {
    return await strapi.entityService.delete('{{service_uid}}', ctx.params.id);
  },
};
";
